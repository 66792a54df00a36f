use leeca_adguard::{AdGuardClient, AdGuardResult};

#[tokio::main]
async fn main() -> AdGuardResult<()> {
    let client = AdGuardClient::builder()
        .base_url("http://192.168.1.10:3000")
        .credentials("admin", "password")
        .build()
        .await?;

    let status = client.status().await?;
    println!("Version: {}", status.version);
    println!("Language: {}", status.language);
    println!("DNS listening on {:?} port {}", status.dns_addresses, status.dns_port);
    println!("Protection enabled: {}", status.protection_enabled);
    println!("Running: {}", status.running);

    Ok(())
}
