use clap::ValueEnum;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Sets or clears the colour scheme on the `<html>` element.
    pub(crate) fn apply(theme: Option<Self>) {
        use gloo::utils::document;

        let Some(html) = document().document_element() else {
            log::error!("document has no root element");
            return;
        };

        let result = match theme {
            Some(theme) => {
                log::debug!("theme-scheme: {}", theme.scheme());
                html.set_attribute(Self::ATTR_NAME, theme.scheme())
            }
            None => {
                log::debug!("no theme preference");
                html.remove_attribute(Self::ATTR_NAME)
            }
        };

        if let Err(err) = result {
            log::error!("failed to set theme: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_match_value_names() {
        for theme in Theme::value_variants() {
            let name = theme.to_possible_value().unwrap();
            assert_eq!(name.get_name(), theme.scheme());
        }
    }
}
