use campusconnect::Config;
use campusconnect_user::Principal;

/// Prints a token accepted by the API, standing in for the identity provider.
pub fn issue(
    config: Config,
    sub: String,
    email: Option<String>,
    name: Option<String>,
) -> anyhow::Result<()> {
    let principal = Principal {
        id: sub,
        email,
        name,
    };
    let token = campusconnect::auth::generate_token(&config.jwt, &principal)?;

    println!("{token}");

    Ok(())
}
