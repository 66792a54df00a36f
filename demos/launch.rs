use leeca_adguard::{AdGuardResult, ListenAddr, ServiceLauncher};

#[tokio::main]
async fn main() -> AdGuardResult<()> {
    let addr = ListenAddr::new("0.0.0.0".to_string()).await?;
    let handle = ServiceLauncher::new().run(&addr).await?;

    println!("AdGuard Home started with pid {}", handle.pid());

    // Block until the service exits; a supervisor would normally keep
    // the handle around instead.
    if let Some(status) = handle.wait().await {
        println!("service exited: {}", status);
    }

    Ok(())
}
