use crate::adapters::views::{escape_html, layout};

/// Inline message shown above the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginNotice {
    InvalidCredentials,
    MissingFields,
    Unavailable,
}

impl LoginNotice {
    fn message(&self) -> &'static str {
        match self {
            LoginNotice::InvalidCredentials => "Invalid username/email or password.",
            LoginNotice::MissingFields => "Please enter both your email and password.",
            LoginNotice::Unavailable => "Sign-in is unavailable right now. Please try again later.",
        }
    }
}

pub fn render(notice: Option<LoginNotice>, email: &str) -> String {
    let notice_html = notice
        .map(|n| format!(r#"<p id="err" class="error">{}</p>"#, n.message()))
        .unwrap_or_default();

    let body = format!(
        r#"<form id="form" class="login card" method="post" action="/login">
<h1>Sign in</h1>
{notice}
<label for="email">Username or email</label>
<input id="email" name="email" type="text" autocomplete="username" value="{email}" required>
<label for="password">Password</label>
<input id="password" name="password" type="password" autocomplete="current-password" required>
<button type="submit">Sign in</button>
</form>"#,
        notice = notice_html,
        email = escape_html(email),
    );

    layout("Sign in", "", &body)
}
