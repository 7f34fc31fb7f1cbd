use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

const PROMPT: &str = "lispy> ";
const MULTILINE_INDICATOR: &str = "...> ";

/// The REPL prompt, `lispy> `.
pub struct LispyPrompt;

impl Prompt for LispyPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(PROMPT)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_prompt(mode: PromptEditMode) -> String {
        format!(
            "{}{}",
            LispyPrompt.render_prompt_left(),
            LispyPrompt.render_prompt_indicator(mode)
        )
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(full_prompt(PromptEditMode::Default), "lispy> ");
        assert_eq!(full_prompt(PromptEditMode::Emacs), "lispy> ");
        assert_eq!(LispyPrompt.render_prompt_right(), "");
    }

    #[test]
    fn test_history_search_indicator() {
        let search = PromptHistorySearch::new(PromptHistorySearchStatus::Failing, "(+".to_string());
        assert_eq!(
            LispyPrompt.render_prompt_history_search_indicator(search),
            "(failing reverse-search: (+) "
        );
    }
}
