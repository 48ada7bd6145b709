// File: src/screen.rs
// Purpose: Login/registration panel switching

use crate::config::Config;
use crate::controller::FormController;

pub const LOGIN_FORM: &str = "login";
pub const REGISTRATION_FORM: &str = "registration";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPanel {
    #[default]
    Login,
    Register,
}

/// The two forms and which of them is on screen
#[derive(Debug, Clone)]
pub struct AuthScreen {
    panel: AuthPanel,
    login: FormController,
    registration: FormController,
    reset_on_switch: bool,
}

impl AuthScreen {
    pub fn new(login: FormController, registration: FormController) -> Self {
        Self {
            panel: AuthPanel::Login,
            login,
            registration,
            reset_on_switch: true,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let login = FormController::from_config(LOGIN_FORM, &config.login, &config.behavior);
        let registration =
            FormController::from_config(REGISTRATION_FORM, &config.registration, &config.behavior);
        Self {
            reset_on_switch: config.behavior.reset_on_switch,
            ..Self::new(login, registration)
        }
    }

    pub fn panel(&self) -> AuthPanel {
        self.panel
    }

    /// True while the registration panel is shown (the container's "active" class)
    pub fn container_is_active(&self) -> bool {
        self.panel == AuthPanel::Register
    }

    pub fn login(&self) -> &FormController {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut FormController {
        &mut self.login
    }

    pub fn registration(&self) -> &FormController {
        &self.registration
    }

    pub fn registration_mut(&mut self) -> &mut FormController {
        &mut self.registration
    }

    /// Form by name ([`LOGIN_FORM`] or [`REGISTRATION_FORM`]), whichever panel is shown
    pub fn form(&self, name: &str) -> Option<&FormController> {
        match name {
            LOGIN_FORM => Some(&self.login),
            REGISTRATION_FORM => Some(&self.registration),
            _ => None,
        }
    }

    pub fn form_mut(&mut self, name: &str) -> Option<&mut FormController> {
        match name {
            LOGIN_FORM => Some(&mut self.login),
            REGISTRATION_FORM => Some(&mut self.registration),
            _ => None,
        }
    }

    pub fn show_register(&mut self) {
        self.panel = AuthPanel::Register;
        if self.reset_on_switch {
            self.registration.reset();
        }
        tracing::debug!("switched to registration panel");
    }

    pub fn show_login(&mut self) {
        self.panel = AuthPanel::Login;
        if self.reset_on_switch {
            self.login.reset();
        }
        tracing::debug!("switched to login panel");
    }
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
