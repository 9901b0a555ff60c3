use reqwest::StatusCode;

#[derive(Debug)]
pub enum PagerDutyError {
    /// Non-success HTTP status from any endpoint. The command aborts rather
    /// than continuing with partial data.
    Api {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },
    /// No team matched the configured name (case-insensitive exact match).
    TeamNotFound(String),
    InvalidDate(String),
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for PagerDutyError {
    fn from(err: reqwest::Error) -> Self {
        PagerDutyError::Transport(err)
    }
}

impl std::fmt::Display for PagerDutyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PagerDutyError::Api {
                endpoint,
                status,
                body,
            } => {
                writeln!(f, "PagerDuty API Error")?;
                writeln!(f, "───────────────────")?;
                writeln!(f, "HTTP {status} from {endpoint}")?;
                if !body.is_empty() {
                    writeln!(f, "{body}")?;
                }
                match status.as_u16() {
                    401 => {
                        writeln!(f, "QUICK FIXES:")?;
                        writeln!(f, "   → Token is invalid or expired")?;
                        write!(f, "   → Run: oncall-analysis configure")
                    }
                    403 => {
                        writeln!(f, "QUICK FIXES:")?;
                        writeln!(f, "   → Token lacks access to this team's data")?;
                        write!(f, "   → Check the API key's role in PagerDuty")
                    }
                    429 => write!(f, "Rate limited by PagerDuty; wait a minute and re-run"),
                    _ => write!(f, "PagerDuty status: https://status.pagerduty.com"),
                }
            }
            PagerDutyError::TeamNotFound(name) => {
                writeln!(f, "Team Not Found")?;
                writeln!(f, "──────────────")?;
                writeln!(f, "No team named '{name}' (case-insensitive exact match)")?;
                writeln!(f, "QUICK FIXES:")?;
                writeln!(f, "   → Check the team's display name in PagerDuty")?;
                write!(f, "   → Run: oncall-analysis configure")
            }
            PagerDutyError::InvalidDate(raw) => {
                write!(f, "Invalid date '{raw}', expected format YYYY-mm-dd")
            }
            PagerDutyError::Transport(err) => {
                writeln!(f, "PagerDuty Network Error")?;
                writeln!(f, "───────────────────────")?;
                writeln!(f, "{err}")?;
                writeln!(f, "QUICK FIXES:")?;
                writeln!(f, "   → Check connectivity: curl -I https://api.pagerduty.com")?;
                write!(f, "   → Timeout is configurable via pagerduty.timeout_seconds")
            }
        }
    }
}

impl std::error::Error for PagerDutyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PagerDutyError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
