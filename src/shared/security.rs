use crate::shared::error::ReportError;
use crate::shared::Result;

/// Maximum length of a kube context name accepted on the command line
pub const MAX_CONTEXT_LENGTH: usize = 253;

/// Maximum length of a namespace name (RFC 1123 label)
pub const MAX_NAMESPACE_LENGTH: usize = 63;

/// Validates a kube context name before it is passed to kubectl
///
/// # Security
/// Context names end up as process arguments. A leading `-` would be read as
/// a kubectl flag, so it is rejected along with any character outside the set
/// cloud providers use for context names.
///
/// # Errors
/// Returns `ReportError::InvalidIdentifier` when the name is empty, too long,
/// starts with `-` or contains a disallowed character
pub fn validate_context_name(name: &str) -> Result<()> {
    validate_identifier(name, "cluster context", MAX_CONTEXT_LENGTH, |c| {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '@' | '/')
    })
}

/// Validates a namespace name (lowercase RFC 1123 label)
///
/// # Errors
/// Returns `ReportError::InvalidIdentifier` for names kubectl would refuse
/// anyway, and for names that could be parsed as flags
pub fn validate_namespace_name(name: &str) -> Result<()> {
    validate_identifier(name, "namespace", MAX_NAMESPACE_LENGTH, |c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    })?;

    if name.ends_with('-') {
        return Err(invalid("namespace", name, "must end with an alphanumeric character"));
    }

    Ok(())
}

fn validate_identifier(
    value: &str,
    kind: &str,
    max_len: usize,
    allowed: impl Fn(char) -> bool,
) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(kind, value, "must not be empty"));
    }

    if value.len() > max_len {
        return Err(invalid(
            kind,
            value,
            &format!("is too long ({} bytes, maximum {})", value.len(), max_len),
        ));
    }

    if value.starts_with('-') {
        return Err(invalid(kind, value, "must not start with '-'"));
    }

    if let Some(bad) = value.chars().find(|c| !allowed(*c)) {
        return Err(invalid(
            kind,
            value,
            &format!("contains invalid character '{}'", bad),
        ));
    }

    Ok(())
}

fn invalid(kind: &str, value: &str, reason: &str) -> anyhow::Error {
    ReportError::InvalidIdentifier {
        kind: kind.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_context_name_accepts_cloud_contexts() {
        assert!(validate_context_name("prod-aks").is_ok());
        assert!(validate_context_name("arn:aws:eks:eu-west-1:123:cluster/main").is_ok());
        assert!(validate_context_name("gke_project_europe-west1_main").is_ok());
        assert!(validate_context_name("admin@kind-dev").is_ok());
    }

    #[test]
    fn test_validate_context_name_rejects_flags() {
        let result = validate_context_name("--kubeconfig=/etc/passwd");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must not start with '-'"));
    }

    #[test]
    fn test_validate_context_name_rejects_empty_and_spaces() {
        assert!(validate_context_name("").is_err());
        assert!(validate_context_name("prod cluster").is_err());
    }

    #[test]
    fn test_validate_namespace_name() {
        assert!(validate_namespace_name("kube-system").is_ok());
        assert!(validate_namespace_name("team42").is_ok());
        assert!(validate_namespace_name("Payments").is_err());
        assert!(validate_namespace_name("trailing-").is_err());
        assert!(validate_namespace_name("-n").is_err());
        assert!(validate_namespace_name(&"a".repeat(64)).is_err());
    }
}
