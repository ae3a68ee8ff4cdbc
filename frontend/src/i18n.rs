use gloo_storage::{LocalStorage, Storage};
use log::debug;
use yew::prelude::*;

const LANGUAGE_KEY: &str = "language";

/// UI languages the club app ships translations for. Spanish is the
/// default for new accounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Unknown codes fall back to the default instead of erroring; the
    /// profile column is free-form text.
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::En,
            _ => Language::Es,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Es
    }
}

fn stored_language() -> Language {
    LocalStorage::get::<String>(LANGUAGE_KEY)
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq)]
pub struct I18nContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct I18nProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let language = use_state_eq(stored_language);

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            debug!("Switching UI language to {}", next.code());
            if let Err(e) = LocalStorage::set(LANGUAGE_KEY, next.code()) {
                debug!("Could not persist language preference: {:?}", e);
            }
            language.set(next);
        })
    };

    let context = I18nContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<I18nContext> context={context}>
            {props.children.clone()}
        </ContextProvider<I18nContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("es"), Language::Es);
        assert_eq!(Language::En.code(), "en");
    }

    #[test]
    fn test_unknown_code_falls_back_to_spanish() {
        assert_eq!(Language::from_code("fr"), Language::Es);
        assert_eq!(Language::from_code(""), Language::Es);
    }
}
