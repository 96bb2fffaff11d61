//! Shadow tokens, including focus rings.

token_enum! {
    pub enum Shadow in "shadow" {
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Focus => "focus",
        FocusDanger => "focusDanger",
    }
}

impl Shadow {
    pub const fn value(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Sm => "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
            Shadow::Md => "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
            Shadow::Lg => "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
            Shadow::Xl => "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
            Shadow::Focus => "0 0 0 3px rgba(59, 130, 246, 0.3)",
            Shadow::FocusDanger => "0 0 0 3px rgba(239, 68, 68, 0.3)",
        }
    }
}
