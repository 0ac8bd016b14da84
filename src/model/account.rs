use serde::{Deserialize, Serialize};
use zino::prelude::*;
use zino_derive::{ModelAccessor, ModelHooks, Schema};

/// The `account` model for admin principals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema, ModelAccessor, ModelHooks)]
#[serde(rename_all = "snake_case")]
#[serde(default)]
pub struct Account {
    // Basic fields.
    #[schema(readonly)]
    id: Uuid,
    #[schema(not_null, index_type = "text")]
    name: String,
    #[schema(default_value = "Active", index_type = "hash")]
    status: String,

    // Info fields.
    #[schema(not_null, unique, writeonly)]
    account: String,
    #[schema(not_null, writeonly)]
    password: String,
    email: String,
    locale: String,
    #[schema(snapshot, index_type = "gin")]
    roles: Vec<String>,

    // Security.
    last_login_at: DateTime,
    last_login_ip: String,
    current_login_at: DateTime,
    current_login_ip: String,
    login_count: u32,

    // Extensions.
    extra: Map,

    // Revisions.
    #[schema(readonly, default_value = "now", index_type = "btree")]
    created_at: DateTime,
    #[schema(default_value = "now", index_type = "btree")]
    updated_at: DateTime,
    version: u64,
}

impl Model for Account {
    #[inline]
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: "Active".to_owned(),
            ..Self::default()
        }
    }

    fn read_map(&mut self, data: &Map) -> Validation {
        let mut validation = Validation::new();
        if let Some(result) = data.parse_uuid("id") {
            match result {
                Ok(id) => self.id = id,
                Err(err) => validation.record_fail("id", err),
            }
        }
        if let Some(name) = data.parse_string("name") {
            self.name = name.into_owned();
        }
        if let Some(status) = data.parse_string("status") {
            self.status = status.into_owned();
        }
        if let Some(account) = data.parse_string("account") {
            self.account = account.into_owned();
        }
        if let Some(password) = data.parse_string("password") {
            match Self::encrypt_password(&password) {
                Ok(password) => self.password = password,
                Err(err) => validation.record_fail("password", err),
            }
        }
        if let Some(email) = data.parse_string("email") {
            self.email = email.into_owned();
        }
        if let Some(locale) = data.parse_string("locale") {
            self.locale = locale.into_owned();
        }
        if let Some(roles) = data.parse_str_array("roles") {
            if let Err(err) = self.set_roles(roles) {
                validation.record_fail("roles", err);
            }
        }
        if self.roles.is_empty() && !validation.contains_key("roles") {
            validation.record("roles", "should be nonempty");
        }
        if self.account.is_empty() {
            validation.record("account", "should be nonempty");
        }
        validation
    }
}

impl Account {
    /// Sets the `roles` field, restricted to the known admin roles.
    pub fn set_roles(&mut self, roles: Vec<&str>) -> Result<(), Error> {
        for role in &roles {
            if !matches!(*role, "admin" | "editor") {
                let message = format!("the role `{role}` is unsupported");
                return Err(Error::new(message));
            }
        }
        self.roles = roles.into_iter().map(|role| role.to_owned()).collect();
        Ok(())
    }

    /// Returns the `roles` field.
    #[inline]
    pub fn roles(&self) -> &[String] {
        self.roles.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::Account;
    use zino::prelude::*;

    #[test]
    fn it_restricts_roles_to_the_known_set() {
        let mut account = Account::new();
        let mut data = Map::new();
        data.upsert("name", "Freja");
        data.upsert("account", "freja");
        data.upsert("roles", vec!["editor"]);

        let validation = account.read_map(&data);
        assert!(validation.is_success());
        assert_eq!(account.roles(), ["editor"]);

        let mut account = Account::new();
        let mut data = Map::new();
        data.upsert("account", "mads");
        data.upsert("roles", vec!["superuser"]);

        let validation = account.read_map(&data);
        assert!(!validation.is_success());
    }

    #[test]
    fn it_requires_an_account_and_a_role() {
        let mut account = Account::new();
        let validation = account.read_map(&Map::from_entry("name", "Uden Konto"));
        assert!(!validation.is_success());
    }
}
