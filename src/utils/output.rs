use crate::cache::credentials::ObtainedToken;

/// What gets printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// the cached JSON payload as-is
    Raw,
    AccessToken,
}

impl OutputMode {
    pub fn from_flag(print_token: bool) -> Self {
        if print_token {
            OutputMode::AccessToken
        } else {
            OutputMode::Raw
        }
    }
}

pub fn render(token: &ObtainedToken, mode: OutputMode) -> String {
    match mode {
        OutputMode::Raw => token.raw_str().into_owned(),
        OutputMode::AccessToken => token.record.access_token.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::credentials::CredentialsRecord;

    fn token() -> ObtainedToken {
        let raw = br#"{"access_token":"T1","token_type":"Bearer","expires_in":300}"#.to_vec();
        ObtainedToken {
            record: CredentialsRecord::from_slice(&raw).unwrap(),
            raw,
        }
    }

    #[test]
    fn raw_mode_prints_payload_verbatim() {
        assert_eq!(
            render(&token(), OutputMode::from_flag(false)),
            r#"{"access_token":"T1","token_type":"Bearer","expires_in":300}"#
        );
    }

    #[test]
    fn token_mode_prints_access_token_only() {
        assert_eq!(render(&token(), OutputMode::from_flag(true)), "T1");
    }
}
