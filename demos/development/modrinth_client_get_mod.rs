use modq::api::modrinth::ModrinthClient;

#[tokio::main]
async fn main() {
    let client = ModrinthClient::new().unwrap();
    let fetched = client.get_mod(42).await.unwrap();

    match fetched {
        Some(mod_info) => println!(
            "Found mod: {} (ID: {}, downloads: {})",
            mod_info.title, mod_info.id, mod_info.downloads
        ),
        None => println!("No mod with that ID"),
    }
}
