use crate::ExportError;

/// Shared-secret check in front of the export step.
///
/// Generation and preview never go through the gate.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    secret: Option<String>,
}

impl AccessGate {
    /// A gate that lets everything through
    pub fn open() -> Self {
        Self { secret: None }
    }

    /// Empty secrets leave the gate open
    pub fn with_secret(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.secret.is_none()
    }

    pub fn authorize(&self, password: Option<&str>) -> Result<(), ExportError> {
        let Some(secret) = &self.secret else {
            return Ok(());
        };

        match password {
            None | Some("") => Err(ExportError::PasswordRequired),
            Some(p) if p == secret.as_str() => Ok(()),
            Some(_) => {
                tracing::warn!("Rejected export password");
                Err(ExportError::AccessDenied)
            }
        }
    }
}
