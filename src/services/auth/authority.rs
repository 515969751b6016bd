//! Granted authorities derived from a user's stored role list.
//!
//! Roles are stored as a comma-separated string (`"USER"`, `"USER,ADMIN"`).
//! A role string that does not parse is a data-integrity problem and is
//! reported as such rather than being defaulted.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthorityError {
    #[error("role list is empty")]
    Empty,
    #[error("invalid role name: {0:?}")]
    InvalidRole(String),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Authority(String);

impl Authority {
    pub fn new(role: &str) -> Result<Self, AuthorityError> {
        let role = role.trim();
        // Names are taken as stored and compared case-sensitively.
        if role.is_empty() || role.chars().any(char::is_control) {
            return Err(AuthorityError::InvalidRole(role.to_string()));
        }
        Ok(Self(role.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_roles(raw: &str) -> Result<BTreeSet<Authority>, AuthorityError> {
    if raw.trim().is_empty() {
        return Err(AuthorityError::Empty);
    }
    raw.split(',').map(Authority::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_role() {
        let roles = parse_roles("USER").unwrap();
        assert_eq!(roles.len(), 1);
        assert!(roles.contains(&Authority::new("USER").unwrap()));
    }

    #[test]
    fn multiple_roles_are_trimmed_and_deduplicated() {
        let roles = parse_roles(" USER , ADMIN,USER").unwrap();
        let names: Vec<&str> = roles.iter().map(Authority::as_str).collect();
        assert_eq!(names, vec!["ADMIN", "USER"]);
    }

    #[test]
    fn empty_role_list_is_rejected() {
        assert_eq!(parse_roles(""), Err(AuthorityError::Empty));
        assert_eq!(parse_roles("   "), Err(AuthorityError::Empty));
    }

    #[test]
    fn role_names_are_kept_as_stored() {
        let roles = parse_roles("user,ROLE_ADMIN").unwrap();
        let names: Vec<&str> = roles.iter().map(Authority::as_str).collect();
        assert_eq!(names, vec!["ROLE_ADMIN", "user"]);
        assert!(!roles.contains(&Authority::new("USER").unwrap()));
    }

    #[test]
    fn blank_segments_are_rejected() {
        assert_eq!(
            parse_roles("USER,,ADMIN"),
            Err(AuthorityError::InvalidRole(String::new()))
        );
        assert_eq!(
            parse_roles("USER, "),
            Err(AuthorityError::InvalidRole(String::new()))
        );
        assert_eq!(
            parse_roles("USER,\tADMIN\u{7}"),
            Err(AuthorityError::InvalidRole("ADMIN\u{7}".into()))
        );
    }
}
