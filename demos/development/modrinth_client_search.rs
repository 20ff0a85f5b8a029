use modq::api::modrinth::{ModrinthClient, SearchOptions, SortBy};

#[tokio::main]
async fn main() {
    let client = ModrinthClient::new().unwrap();
    let options = SearchOptions {
        query: "sodium".to_string(),
        sort_by: SortBy::Downloads,
        limit: 10,
        ..Default::default()
    };

    let response = client.search(&options).await.unwrap();

    match response {
        Some(results) => {
            for hit in results.hits {
                println!("Found mod: {} (ID: {})", hit.title, hit.mod_id);
            }
        }
        None => println!("No results"),
    }
}
