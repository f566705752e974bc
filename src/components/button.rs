/// Button component
///
/// Pure rendering function from props to a single `<button>` element. Picks
/// one of two predefined style classes from the role, fills defaults, forwards
/// extra attributes, and wires the optional activation callback.

use leptos::*;

/// Visual role of a button. Selects which of the two predefined style
/// classes is applied; there is no third outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonRole {
    #[default]
    Primary,
    Secondary,
}

impl ButtonRole {
    /// Class identifier resolved by the external stylesheet.
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "buttonPrimary",
            Self::Secondary => "buttonSecondary",
        }
    }
}

/// Native activation type of the button at form-submission time. The
/// browser owns the submission semantics; this only sets the attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Role class first, caller class appended with a single separating space.
fn compose_class(role: ButtonRole, extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("{} {}", role.class(), extra),
        None => role.class().to_string(),
    }
}

/// A presentational button.
///
/// Renders exactly one `<button>` whose text content is `label`. Missing
/// optional props fall back to their defaults; there is no validation and no
/// failure path. The component holds no state and does not keep the callback
/// past the render call.
#[component]
pub fn Button(
    /// Text displayed verbatim as the button's content.
    #[prop(into)]
    label: String,
    /// Invoked by the DOM event system once per activation, when supplied.
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Activation type attribute, `button` unless stated otherwise.
    #[prop(optional)]
    button_type: ButtonType,
    /// Style variant, `Primary` unless stated otherwise.
    #[prop(optional)]
    role: ButtonRole,
    /// Extra class appended after the role class.
    #[prop(optional, into)]
    class: Option<String>,
    /// Attributes forwarded unchanged to the underlying element
    /// (`attr:disabled`, `attr:id`, aria attributes, ...).
    #[prop(attrs)]
    attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let class_attr = compose_class(role, class.as_deref());

    view! {
        <button
            {..attrs}
            type=button_type.as_str()
            class=class_attr
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_class_mapping() {
        assert_eq!(ButtonRole::Primary.class(), "buttonPrimary");
        assert_eq!(ButtonRole::Secondary.class(), "buttonSecondary");
    }

    #[test]
    fn test_role_defaults_to_primary() {
        assert_eq!(ButtonRole::default(), ButtonRole::Primary);
        assert_eq!(compose_class(ButtonRole::default(), None), "buttonPrimary");
    }

    #[test]
    fn test_type_attribute_values() {
        assert_eq!(ButtonType::Button.as_str(), "button");
        assert_eq!(ButtonType::Submit.as_str(), "submit");
        assert_eq!(ButtonType::Reset.as_str(), "reset");
        assert_eq!(ButtonType::default(), ButtonType::Button);
    }

    #[test]
    fn test_class_composition() {
        assert_eq!(
            compose_class(ButtonRole::Primary, Some("extra")),
            "buttonPrimary extra"
        );
        assert_eq!(
            compose_class(ButtonRole::Secondary, Some("wide")),
            "buttonSecondary wide"
        );
        assert_eq!(compose_class(ButtonRole::Secondary, None), "buttonSecondary");
    }
}
