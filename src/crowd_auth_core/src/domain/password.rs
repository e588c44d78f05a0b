use secrecy::Secret;

/// End-user password, only ever forwarded to the identity server.
///
/// No local rules apply: even an empty password is sent and judged remotely.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl From<Secret<String>> for Password {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
