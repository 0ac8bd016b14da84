use crate::model::Account;
use zino::prelude::*;

/// Generates the access token and refresh token for an admin account.
pub async fn generate_token(body: Map) -> Result<(Uuid, Map), Error> {
    let account = body
        .get_str("account")
        .ok_or_else(|| warn!("401 Unauthorized: the `account` field should be specified"))?;
    let password = body
        .get_str("password")
        .ok_or_else(|| warn!("401 Unauthorized: the `password` field should be specified"))?;

    let mut query = Query::default();
    query.allow_fields(&[
        "id",
        "password",
        "roles",
        "current_login_at",
        "current_login_ip",
    ]);
    query.add_filter("status", Map::from_entry("$nin", vec!["Locked", "Deleted"]));
    query.add_filter("account", account);

    let mut user: Map = Account::find_one(&query)
        .await?
        .ok_or_else(|| warn!("404 Not Found: invalid account or password"))?;
    let encrypted_password = user
        .get_str("password")
        .ok_or_else(|| warn!("404 Not Found: the account password is absent"))?;
    if !Account::verify_password(password, encrypted_password)? {
        return Err(warn!("401 Unauthorized: invalid account or password"));
    }

    let user_id = user
        .parse_string("id")
        .ok_or_else(|| warn!("404 Not Found: the account id is absent"))?;
    let mut claims = JwtClaims::new(user_id.as_ref());
    if user.contains_key("roles") {
        claims.add_data_entry("roles", user.parse_str_array("roles"));
    }

    let user_id = user_id.parse()?;
    let mut data = Map::new();
    data.upsert("expires_in", claims.expires_in().as_secs());
    data.upsert("refresh_token", claims.refresh_token()?);
    data.upsert("access_token", claims.access_token()?);
    data.upsert("current_login_at", user.remove("current_login_at"));
    data.upsert("current_login_ip", user.remove("current_login_ip"));
    Ok((user_id, data))
}

/// Refreshes the access token for an admin account.
pub async fn refresh_token(claims: &JwtClaims) -> Result<Map, Error> {
    if !claims.data().is_empty() {
        bail!("401 Unauthorized: the token is not a refresh token");
    }
    let Some(user_id) = claims.subject() else {
        bail!("401 Unauthorized: the token does not have a subject");
    };

    let mut query = Query::default();
    query.allow_fields(&["id", "roles"]);
    query.add_filter("id", user_id);
    query.add_filter(
        "status",
        Map::from_entry("$nin", vec!["SignedOut", "Locked", "Deleted"]),
    );

    let user: Map = Account::find_one(&query)
        .await?
        .ok_or_else(|| warn!("404 Not Found: cannot get the account `{}`", user_id))?;
    let mut claims = JwtClaims::new(user_id);
    if user.contains_key("roles") {
        claims.add_data_entry("roles", user.parse_str_array("roles"));
    }

    let mut data = Map::new();
    data.upsert("expires_in", claims.expires_in().as_secs());
    data.upsert("access_token", claims.access_token()?);
    Ok(data)
}
