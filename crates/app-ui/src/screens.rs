//! Application screens
//!
//! Screens hold local UI state, receive a [`ThemeContext`] at construction
//! and produce serializable views with every component's computed styles.

use app_core::auth::{AuthService, LoginError};
use app_core::credentials::{CredentialErrors, PasswordError, UsernameError};
use app_core::session::AuthToken;
use serde::{Deserialize, Serialize};

use crate::components::{
    ButtonStyles, ButtonVariant, CardPadding, CardStyles, Elevation, SolarButton, SolarCard,
    SwitchStyles, Text, TextField, TextFieldStyles, TextStyles, ThemeSwitch,
};
use crate::provider::ThemeContext;
use crate::theme::{Color, Theme, ThemeMode};
use crate::typography::TypographyVariant;

// =============================================================================
// Rendered component views
// =============================================================================

/// Text with its computed styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextView {
    /// Component props
    #[serde(flatten)]
    pub text: Text,
    /// Computed styles
    pub styles: TextStyles,
}

impl TextView {
    fn render(text: Text, theme: &Theme) -> Self {
        let styles = text.computed_styles(theme);
        Self { text, styles }
    }
}

/// Button with its computed styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonView {
    /// Component props
    #[serde(flatten)]
    pub button: SolarButton,
    /// Computed styles
    pub styles: ButtonStyles,
}

impl ButtonView {
    fn render(button: SolarButton, theme: &Theme) -> Self {
        let styles = button.computed_styles(theme);
        Self { button, styles }
    }
}

/// Text field with its computed styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFieldView {
    /// Component props
    #[serde(flatten)]
    pub field: TextField,
    /// Computed styles
    pub styles: TextFieldStyles,
}

impl TextFieldView {
    fn render(field: TextField, theme: &Theme) -> Self {
        let styles = field.computed_styles(theme);
        Self { field, styles }
    }
}

/// Switch with its computed styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchView {
    /// Component props
    #[serde(flatten)]
    pub switch: ThemeSwitch,
    /// Computed styles
    pub styles: SwitchStyles,
}

/// Card with its content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    /// Component props
    pub card: SolarCard,
    /// Computed styles
    pub styles: CardStyles,
    /// Card title
    pub title: TextView,
    /// Card body copy
    pub body: TextView,
    /// Buttons inside the card
    pub buttons: Vec<ButtonView>,
}

// =============================================================================
// Login Screen
// =============================================================================

/// Editable login form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Entered username
    pub username: String,
    /// Entered password
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Inline username error
    pub username_error: Option<UsernameError>,
    /// Inline password error
    pub password_error: Option<PasswordError>,
    /// Login in flight
    pub loading: bool,
    /// User-visible alert
    pub alert: Option<String>,
}

/// Result of submitting the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; errors are shown inline
    Invalid(CredentialErrors),
    /// Authentication succeeded and the token was persisted
    LoggedIn(AuthToken),
    /// Authentication failed; an alert is shown
    Failed(String),
}

/// Alert shown for the password recovery link
pub const PASSWORD_RECOVERY_ALERT: &str = "Password recovery is still in development";

type LoginCallback = Box<dyn FnMut(&AuthToken) + Send>;

/// Login screen
pub struct LoginScreen {
    theme: ThemeContext,
    auth: AuthService,
    form: LoginForm,
    on_login: Option<LoginCallback>,
}

impl std::fmt::Debug for LoginScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginScreen")
            .field("username", &self.form.username)
            .field("loading", &self.form.loading)
            .finish_non_exhaustive()
    }
}

impl LoginScreen {
    /// Create an empty login screen
    pub fn new(theme: ThemeContext, auth: AuthService) -> Self {
        Self { theme, auth, form: LoginForm::default(), on_login: None }
    }

    /// Register the callback fired after a successful login
    pub fn on_login(mut self, callback: impl FnMut(&AuthToken) + Send + 'static) -> Self {
        self.on_login = Some(Box::new(callback));
        self
    }

    /// Current form state
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Edit the username; clears its inline error
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.form.username = username.into();
        self.form.username_error = None;
    }

    /// Edit the password; clears its inline error
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
        self.form.password_error = None;
    }

    /// Dismiss the current alert
    pub fn dismiss_alert(&mut self) {
        self.form.alert = None;
    }

    /// Password recovery link pressed
    pub fn forgot_password(&mut self) {
        tracing::debug!("password recovery requested");
        self.form.alert = Some(PASSWORD_RECOVERY_ALERT.to_string());
    }

    /// Validate and, if valid, log in
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.form.alert = None;
        self.form.loading = true;
        let result = self.auth.login(&self.form.username, &self.form.password).await;
        self.form.loading = false;

        match result {
            Ok(token) => {
                if let Some(callback) = self.on_login.as_mut() {
                    callback(&token);
                }
                SubmitOutcome::LoggedIn(token)
            }
            Err(LoginError::Validation(errors)) => {
                self.form.username_error = errors.username;
                self.form.password_error = errors.password;
                SubmitOutcome::Invalid(errors)
            }
            Err(LoginError::Auth(e)) => {
                let message = format!("Login failed: {e}");
                self.form.alert = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Build the view against the active theme
    pub fn view(&self) -> LoginView {
        let theme = self.theme.theme();
        let form = &self.form;

        LoginView {
            background: theme.colors.background.clone(),
            title: TextView::render(
                Text::new("Welcome").with_variant(TypographyVariant::H1),
                theme,
            ),
            subtitle: TextView::render(Text::new("Sign in to continue").secondary(), theme),
            username: TextFieldView::render(
                TextField::new("Username")
                    .with_value(form.username.clone())
                    .with_placeholder("your.username")
                    .with_error(form.username_error.map(|e| e.to_string()))
                    .disabled(form.loading),
                theme,
            ),
            password: TextFieldView::render(
                TextField::new("Password")
                    .with_value(form.password.clone())
                    .secure()
                    .with_error(form.password_error.map(|e| e.to_string()))
                    .disabled(form.loading),
                theme,
            ),
            forgot_password: ButtonView::render(
                SolarButton::new("Forgot password?")
                    .with_variant(ButtonVariant::Outline)
                    .disabled(form.loading)
                    .on_press("login.forgot_password"),
                theme,
            ),
            submit: ButtonView::render(
                SolarButton::new("Sign in")
                    .full_width(true)
                    .loading(form.loading)
                    .disabled(form.loading)
                    .on_press("login.submit"),
                theme,
            ),
            alert: form.alert.clone(),
        }
    }
}

/// Rendered login screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginView {
    /// Screen background
    pub background: Color,
    /// Heading
    pub title: TextView,
    /// Sub-heading
    pub subtitle: TextView,
    /// Username field
    pub username: TextFieldView,
    /// Password field
    pub password: TextFieldView,
    /// Password recovery link
    pub forgot_password: ButtonView,
    /// Submit button
    pub submit: ButtonView,
    /// Failure alert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

// =============================================================================
// Home Screen
// =============================================================================

/// Actions the home screen handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum HomeAction {
    /// Dark mode switch flipped
    ToggleTheme,
    /// A mode button pressed
    SetMode(ThemeMode),
    /// A demo button pressed
    Demo(ButtonVariant),
    /// Logout pressed
    Logout,
}

/// What the shell should do after a home action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeOutcome {
    /// Handled on this screen
    Handled,
    /// The user asked to log out
    LogoutRequested,
}

/// Home screen showcasing themed components
pub struct HomeScreen {
    theme: ThemeContext,
    username: Option<String>,
    last_pressed: Option<ButtonVariant>,
}

impl std::fmt::Debug for HomeScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomeScreen").field("username", &self.username).finish_non_exhaustive()
    }
}

impl HomeScreen {
    /// Create the home screen, optionally greeting a known user
    pub fn new(theme: ThemeContext, username: Option<String>) -> Self {
        Self { theme, username, last_pressed: None }
    }

    /// Apply an action
    pub fn handle(&mut self, action: HomeAction) -> HomeOutcome {
        tracing::debug!(?action, "home action");
        match action {
            HomeAction::ToggleTheme => self.theme.toggle_theme(),
            HomeAction::SetMode(mode) => self.theme.set_theme(mode),
            HomeAction::Demo(variant) => self.last_pressed = Some(variant),
            HomeAction::Logout => return HomeOutcome::LogoutRequested,
        }
        HomeOutcome::Handled
    }

    /// Last demo button pressed
    pub fn last_pressed(&self) -> Option<ButtonVariant> {
        self.last_pressed
    }

    /// Build the view against the active theme
    pub fn view(&self) -> HomeView {
        let theme = self.theme.theme();
        let greeting = match &self.username {
            Some(name) => format!("Hello, {name}"),
            None => "Hello again".to_string(),
        };

        let mode = self.theme.mode();
        let mode_buttons = [
            (ThemeMode::Light, "Light"),
            (ThemeMode::Dark, "Dark"),
            (ThemeMode::Auto, "Auto"),
        ]
        .into_iter()
        .map(|(m, title)| {
            let variant = if m == mode { ButtonVariant::Primary } else { ButtonVariant::Outline };
            ButtonView::render(
                SolarButton::new(title).with_variant(variant).on_press(format!("home.mode.{m}")),
                theme,
            )
        })
        .collect();

        let switch = ThemeSwitch::new("Dark mode", self.theme.is_dark_mode())
            .on_toggle("home.toggle_theme");
        let switch_styles = switch.computed_styles(theme);

        let sunlight_notice = self.theme.is_sunlight_override_active().then(|| {
            TextView::render(
                Text::new("Daylight detected: dark theme forced for readability")
                    .with_variant(TypographyVariant::Caption)
                    .secondary(),
                theme,
            )
        });

        HomeView {
            background: theme.colors.background.clone(),
            title: TextView::render(
                Text::new("Solar Shell").with_variant(TypographyVariant::H1),
                theme,
            ),
            greeting: TextView::render(
                Text::new(greeting).with_variant(TypographyVariant::H3),
                theme,
            ),
            theme_switch: SwitchView { switch, styles: switch_styles },
            mode_buttons,
            sunlight_notice,
            cards: self.demo_cards(theme),
            logout: ButtonView::render(
                SolarButton::new("Log out")
                    .with_variant(ButtonVariant::Danger)
                    .full_width(true)
                    .on_press("home.logout"),
                theme,
            ),
        }
    }

    fn demo_cards(&self, theme: &Theme) -> Vec<CardView> {
        let card = |card: SolarCard, title: &str, body: &str, variants: &[ButtonVariant]| {
            let buttons = variants
                .iter()
                .map(|v| {
                    let label = format!("{v:?}");
                    let mut button = SolarButton::new(label.clone())
                        .with_variant(*v)
                        .full_width(true)
                        .on_press(format!("home.demo.{}", label.to_lowercase()));
                    if self.last_pressed == Some(*v) {
                        button = button.with_icon("check");
                    }
                    ButtonView::render(button, theme)
                })
                .collect();

            CardView {
                styles: card.computed_styles(theme),
                card,
                title: TextView::render(
                    Text::new(title).with_variant(TypographyVariant::H3),
                    theme,
                ),
                body: TextView::render(Text::new(body).secondary(), theme),
                buttons,
            }
        };

        vec![
            card(
                SolarCard::new(),
                "Actions",
                "High-contrast buttons stay legible in bright light.",
                &[ButtonVariant::Primary, ButtonVariant::Secondary],
            ),
            card(
                SolarCard::new().with_elevation(Elevation::High).with_padding(CardPadding::Large),
                "Status",
                "Semantic colors for outcomes.",
                &[ButtonVariant::Success, ButtonVariant::Warning, ButtonVariant::Danger],
            ),
            card(
                SolarCard::new().with_elevation(Elevation::Low).with_border(false),
                "Subtle",
                "Outline buttons for secondary choices.",
                &[ButtonVariant::Outline],
            ),
        ]
    }
}

/// Rendered home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    /// Screen background
    pub background: Color,
    /// Heading
    pub title: TextView,
    /// Greeting line
    pub greeting: TextView,
    /// Dark mode switch
    pub theme_switch: SwitchView,
    /// Light/Dark/Auto selectors
    pub mode_buttons: Vec<ButtonView>,
    /// Shown while the sunlight override is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunlight_notice: Option<TextView>,
    /// Demo cards
    pub cards: Vec<CardView>,
    /// Logout button
    pub logout: ButtonView,
}
