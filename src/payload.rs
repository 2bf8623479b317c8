/// Form body to send to the UltraDNS token endpoint.
#[derive(Debug)]
pub(crate) struct Payload {
    fields: Vec<(&'static str, String)>,
}

impl Payload {
    /// Creates a new payload for the given OAuth grant type.
    pub(crate) fn new(grant_type: &str) -> Self {
        Self {
            fields: vec![("grant_type", grant_type.to_string())],
        }
    }

    /// Creates the payload for a username and password login.
    pub(crate) fn password_grant(username: &str, password: &str) -> Self {
        Self::new("password")
            .add("username", username)
            .add("password", password)
    }

    /// Adds the given key-value pair.
    pub(crate) fn add<T: ToString>(mut self, key: &'static str, value: T) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    pub(crate) fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }
}
