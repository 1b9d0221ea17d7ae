macro_rules! list {
    ($($module:ident),+ $(,)?) => {
        $(
            mod $module;
            use $module::$module;
        )+

        pub fn list() -> Vec<crate::utils::poise::Command> {
            vec![$($module()),+]
        }
    };
}

list! {
    set_mod_channel,
    set_emoji,
    set_odds,
    post_roller,
    show_odds,
    edit_roll_log,
}

trait LogCommands {
    fn log_command(&self);
}

impl LogCommands for crate::utils::Context<'_> {
    fn log_command(&self) {
        tracing::info!(
            guild = ?self.guild_id(),
            "@{} (<#{}>): {}",
            self.author().name,
            self.channel_id(),
            self.invocation_string()
        );
    }
}

/// Renders an optional id for `show-odds`.
fn or_not_set<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "Not set".to_owned(), |value| value.to_string())
}
