/// A composable predicate rendered into the search endpoint's textual filter
/// syntax, e.g. `categories="tech" AND (versions="1.16.4" OR versions="1.16.5")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// A single `field="value"` constraint.
    Eq { field: String, value: String },
    /// Every child must hold. Children are joined with ` AND `.
    All(Vec<Filter>),
    /// At least one child must hold. Children are joined with ` OR `.
    Any(Vec<Filter>),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All(Vec::new())
    }
}

impl Filter {
    /// The empty filter. Renders to an empty statement.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Constrain results to a category slug, e.g. `tech` or `fabric`.
    pub fn category(slug: impl Into<String>) -> Self {
        Self::eq("categories", slug)
    }

    /// Constrain results to a supported game version, e.g. `1.16.5`.
    pub fn version(version: impl Into<String>) -> Self {
        Self::eq("versions", version)
    }

    pub fn and(self, other: Filter) -> Self {
        match self {
            Filter::All(mut children) => {
                children.push(other);
                Filter::All(children)
            }
            first => Filter::All(vec![first, other]),
        }
    }

    pub fn or(self, other: Filter) -> Self {
        match self {
            Filter::Any(mut children) => {
                children.push(other);
                Filter::Any(children)
            }
            first => Filter::Any(vec![first, other]),
        }
    }

    /// An empty filter contributes nothing to the statement and must be
    /// omitted from the query string entirely.
    pub fn is_empty(&self) -> bool {
        match self {
            Filter::Eq { .. } => false,
            Filter::All(children) | Filter::Any(children) => {
                children.iter().all(Filter::is_empty)
            }
        }
    }

    /// Render the predicate tree into the remote filter syntax. The empty
    /// filter renders to an empty string.
    pub fn build_statement(&self) -> String {
        match self {
            Filter::Eq { field, value } => format!("{}=\"{}\"", field, value),
            Filter::All(children) => Self::join(children, " AND "),
            Filter::Any(children) => Self::join(children, " OR "),
        }
    }

    fn join(children: &[Filter], separator: &str) -> String {
        children
            .iter()
            .filter(|child| !child.is_empty())
            .map(|child| {
                let statement = child.build_statement();
                // Composite children with more than one effective term need
                // grouping so the AND/OR precedence survives rendering.
                if child.term_count() > 1 {
                    format!("({})", statement)
                } else {
                    statement
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn term_count(&self) -> usize {
        match self {
            Filter::Eq { .. } => 1,
            Filter::All(children) | Filter::Any(children) => {
                children.iter().map(Filter::term_count).sum()
            }
        }
    }
}
