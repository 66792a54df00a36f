use leeca_adguard::{AdGuardClient, AdGuardResult, RewriteRecord};

#[tokio::main]
async fn main() -> AdGuardResult<()> {
    let client = AdGuardClient::builder()
        .base_url("http://192.168.1.10:3000")
        .credentials("admin", "password")
        .build()
        .await?;

    let record = RewriteRecord::new("nas.home.example", "192.168.1.42");
    client.add_rewrite(&record).await?;

    for record in client.rewrites().await? {
        println!("{} -> {}", record.domain, record.answer);
    }

    client.delete_rewrite(&record).await?;

    Ok(())
}
