use anyhow::Result;
use cdpsign::v1::{DefaultCredentialProvider, RequestSigner};
use cdpsign::{default_context, Signer};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let uri = env::args()
        .nth(1)
        .unwrap_or_else(|| "https://api.us-west-1.cdp.cloudera.com/api/v1/iam/listUsers".into());

    // Credentials come from CDP_ACCESS_KEY_ID / CDP_PRIVATE_KEY or ~/.cdp/credentials.
    let signer = Signer::new(
        default_context(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    let mut req = http::Request::post(uri)
        .header("content-type", "application/json")
        .body(())?
        .into_parts()
        .0;

    signer.sign(&mut req, None).await?;

    for (name, value) in &req.headers {
        println!("{name}: {}", value.to_str()?);
    }
    Ok(())
}
