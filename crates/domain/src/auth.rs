use crate::{
    ApiError, AuthError, Domain, Session, SessionError, StoredSession, User, UserID,
    ValidationError,
};

#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// Logs in at `domain` and stores the resulting session for that domain only.
    async fn log_in(&self, domain: Domain, credentials: Credentials)
    -> Result<Session, AuthError>;
    /// Registers at `domain` and stores the resulting session for that domain only.
    async fn register(
        &self,
        domain: Domain,
        registration: Registration,
    ) -> Result<Session, AuthError>;
    async fn change_password(&self, new_password: String) -> Result<String, ApiError>;
    async fn get_partner_user(&self, id: &UserID) -> Result<User, ApiError>;

    fn log_out(&self, domain: Domain);
    fn get_session(&self, domain: Domain) -> Result<Option<StoredSession>, SessionError>;
    fn is_authenticated(&self, domain: Domain) -> bool;

    fn get_user(&self, domain: Domain) -> Option<User> {
        self.get_session(domain).ok().flatten().map(|s| s.user)
    }
}

#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    async fn log_in(&self, domain: Domain, credentials: Credentials) -> Result<Session, ApiError>;
    async fn register(
        &self,
        domain: Domain,
        registration: Registration,
    ) -> Result<Session, ApiError>;
    async fn change_password(&self, new_password: String) -> Result<String, ApiError>;
    async fn read_partner_user(&self, id: &UserID) -> Result<User, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            email: validate_email(email)?,
            password: validate_password(password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Registration {
    pub fn new(email: &str, password: &str, name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Missing("name".to_string()));
        }
        Ok(Self {
            email: validate_email(email)?,
            password: validate_password(password)?,
            name: name.to_string(),
        })
    }
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Missing("email".to_string()));
    }
    if !email.contains('@') {
        return Err(ValidationError::Other("Invalid email address".to_string()));
    }
    Ok(email.to_string())
}

fn validate_password(password: &str) -> Result<String, ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Missing("password".to_string()));
    }
    Ok(password.to_string())
}
