use crate::args::hints::cmd;
use crate::presentation::view_models::{
    AuthStatusViewModel, CommandResultViewModel, Guidance, StatusBadge, UserViewModel,
};
use relato_sdk::types::CurrentUser;

pub(crate) fn user_view(user: &CurrentUser) -> UserViewModel {
    UserViewModel {
        id: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        display_name: user.display_name().to_string(),
        avatar_url: user.avatar_url.clone(),
    }
}

pub fn present_signed_in(
    user: &CurrentUser,
    new_account: bool,
) -> CommandResultViewModel<AuthStatusViewModel> {
    let label = if new_account {
        format!("Account created, signed in as {}", user.email)
    } else {
        format!("Signed in as {}", user.email)
    };

    let mut result = CommandResultViewModel::new(AuthStatusViewModel {
        signed_in: true,
        user: Some(user_view(user)),
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(Guidance::new("Browse the feed").with_command(cmd::FEED_LIST));

    if new_account {
        result = result.with_suggestion(
            Guidance::new("See what a report contains").with_command(cmd::REPORT_TEMPLATE),
        );
    }
    result
}

pub fn present_signed_out() -> CommandResultViewModel<AuthStatusViewModel> {
    CommandResultViewModel::new(AuthStatusViewModel {
        signed_in: false,
        user: None,
    })
    .with_badge(StatusBadge::success("Signed out"))
}

pub fn present_whoami(user: Option<&CurrentUser>) -> CommandResultViewModel<AuthStatusViewModel> {
    match user {
        Some(user) => CommandResultViewModel::new(AuthStatusViewModel {
            signed_in: true,
            user: Some(user_view(user)),
        }),
        None => CommandResultViewModel::new(AuthStatusViewModel {
            signed_in: false,
            user: None,
        })
        .with_badge(StatusBadge::info("Not signed in"))
        .with_suggestion(Guidance::new("Sign in").with_command(cmd::SIGN_IN))
        .with_suggestion(Guidance::new("Or create an account").with_command(cmd::SIGN_UP)),
    }
}
