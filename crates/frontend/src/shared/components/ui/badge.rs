use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Maps the colour names used by the record enums to thaw colours.
pub fn badge_color(name: &str) -> BadgeColor {
    match name {
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "danger" => BadgeColor::Danger,
        "brand" => BadgeColor::Brand,
        "informative" => BadgeColor::Informative,
        _ => BadgeColor::Subtle,
    }
}

/// Tinted status pill, e.g. "Low Stock" in amber
#[component]
pub fn StatusBadge(
    /// One of the `badge_color()` names of the record enums
    color: &'static str,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(color)>
            {label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_colors() {
        assert!(matches!(badge_color("danger"), BadgeColor::Danger));
        assert!(matches!(badge_color("brand"), BadgeColor::Brand));
        assert!(matches!(badge_color("subtle"), BadgeColor::Subtle));
        assert!(matches!(badge_color("purple"), BadgeColor::Subtle));
    }
}
