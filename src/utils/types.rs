use crate::utils::BackendHealth;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AppView {
    Home,
    Settings,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct InputSettings {
    pub ctrl_enter_submit: bool, // true = Ctrl+Enter to submit, false = Enter to submit
}

impl InputSettings {
    /// Whether an Enter press (with or without Ctrl) should submit.
    pub fn submits_on(&self, enter: bool, ctrl: bool) -> bool {
        enter && ctrl == self.ctrl_enter_submit
    }
}

/// Result of the last `/status` probe shown in the header.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum HealthState {
    #[default]
    Unknown,
    Checking,
    Online(BackendHealth),
    Offline(String),
}

impl HealthState {
    pub fn label(&self) -> &'static str {
        match self {
            HealthState::Unknown => "Backend",
            HealthState::Checking => "Checking...",
            HealthState::Online(_) => "Online",
            HealthState::Offline(_) => "Offline",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            HealthState::Online(_) => "bg-green-500",
            HealthState::Offline(_) => "bg-red-500",
            HealthState::Unknown | HealthState::Checking => "bg-[var(--color-base-content)]/40",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_keys() {
        let ctrl_enter = InputSettings {
            ctrl_enter_submit: true,
        };
        assert!(ctrl_enter.submits_on(true, true));
        assert!(!ctrl_enter.submits_on(true, false));
        assert!(!ctrl_enter.submits_on(false, true));

        let enter = InputSettings {
            ctrl_enter_submit: false,
        };
        assert!(enter.submits_on(true, false));
        assert!(!enter.submits_on(true, true));
    }

    #[test]
    fn test_health_labels() {
        assert_eq!(HealthState::default().label(), "Backend");
        assert_eq!(HealthState::Offline("refused".into()).label(), "Offline");
        assert_eq!(HealthState::Offline("refused".into()).dot_class(), "bg-red-500");
    }
}
