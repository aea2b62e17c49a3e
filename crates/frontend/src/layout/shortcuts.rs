//! Global keyboard shortcuts (Alt+D, Alt+S, Alt+O, Alt+L).

use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Navigate(Page),
    Logout,
}

/// Maps a keydown to a shortcut; only Alt combinations are bound.
pub fn shortcut_for(alt: bool, key: &str) -> Option<Shortcut> {
    if !alt {
        return None;
    }
    match key.to_ascii_lowercase().as_str() {
        "d" => Some(Shortcut::Navigate(Page::Dashboard)),
        "s" => Some(Shortcut::Navigate(Page::Stock)),
        "o" => Some(Shortcut::Navigate(Page::Orders)),
        "l" => Some(Shortcut::Logout),
        _ => None,
    }
}

/// Registers the keydown listener for the lifetime of the calling component.
///
/// The layout is only mounted while signed in, so `on_logout` never fires on the login screen.
pub fn install_shortcuts(ctx: AppGlobalContext, on_logout: Callback<()>) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        let Some(shortcut) = shortcut_for(ev.alt_key(), &ev.key()) else {
            return;
        };
        ev.prevent_default();
        match shortcut {
            Shortcut::Navigate(page) => ctx.navigate(page),
            Shortcut::Logout => on_logout.run(()),
        }
    });
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_bindings() {
        assert_eq!(shortcut_for(true, "d"), Some(Shortcut::Navigate(Page::Dashboard)));
        assert_eq!(shortcut_for(true, "S"), Some(Shortcut::Navigate(Page::Stock)));
        assert_eq!(shortcut_for(true, "o"), Some(Shortcut::Navigate(Page::Orders)));
        assert_eq!(shortcut_for(true, "l"), Some(Shortcut::Logout));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(shortcut_for(false, "d"), None);
        assert_eq!(shortcut_for(true, "x"), None);
        assert_eq!(shortcut_for(true, "Escape"), None);
    }
}
