use std::fmt;

/// A symbol recognized by the [`Mapping`].
///
/// The set is closed: definition files may only reference these names as
/// `$name$` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    QueueTableName,
    ResultsQueueTableName,
    ExecutionTimeStatsTableName,
    MetricsTableName,
    NewTaskNotificationChannelName,
    DequeueFunctionName,
}

impl Token {
    /// Every token, in expansion order.
    pub const ALL: [Token; 6] = [
        Token::QueueTableName,
        Token::ResultsQueueTableName,
        Token::ExecutionTimeStatsTableName,
        Token::MetricsTableName,
        Token::NewTaskNotificationChannelName,
        Token::DequeueFunctionName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Token::QueueTableName => "queue_table_name",
            Token::ResultsQueueTableName => "results_queue_table_name",
            Token::ExecutionTimeStatsTableName => "execution_time_stats_table_name",
            Token::MetricsTableName => "metrics_table_name",
            Token::NewTaskNotificationChannelName => "new_task_notification_channel_name",
            Token::DequeueFunctionName => "dequeue_function_name",
        }
    }

    /// Value used when the mapping file does not assign the token.
    pub fn default_value(self) -> &'static str {
        match self {
            Token::QueueTableName => "sk_tasks_queue_t",
            Token::ResultsQueueTableName => "sk_task_results_t",
            Token::ExecutionTimeStatsTableName => "sk_task_execution_time_stats_t",
            Token::MetricsTableName => "sk_metrics_t",
            Token::NewTaskNotificationChannelName => "sk_task_queue_item_added",
            Token::DequeueFunctionName => "sk_try_dequeue_task",
        }
    }

    pub fn from_name(name: &str) -> Option<Token> {
        Token::ALL.into_iter().find(|token| token.name() == name)
    }

    /// The placeholder form, `$name$`.
    pub fn placeholder(self) -> String {
        format!("${}$", self.name())
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The symbol table used to expand `$token$` placeholders.
///
/// Every token always resolves: tokens not assigned explicitly fall back to
/// [`Token::default_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    values: [Option<String>; 6],
}

impl Mapping {
    /// Create a mapping where every token resolves to its default value
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value to a token
    pub fn with(mut self, token: Token, value: impl Into<String>) -> Self {
        self.values[token.index()] = Some(value.into());
        self
    }

    pub fn get(&self, token: Token) -> &str {
        self.values[token.index()]
            .as_deref()
            .unwrap_or(token.default_value())
    }

    /// Returns `true` if the token was assigned explicitly.
    pub fn is_assigned(&self, token: Token) -> bool {
        self.values[token.index()].is_some()
    }

    /// Iterates every token with its resolved value, in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        Token::ALL.into_iter().map(|token| (token, self.get(token)))
    }

    /// Replaces every `$token$` occurrence of every recognized token.
    ///
    /// Tokens are applied in [`Token::ALL`] order. Unrecognized `$...$`
    /// sequences are left untouched.
    pub fn expand(&self, input: &str) -> String {
        let mut ret = input.to_string();

        for (token, value) in self.iter() {
            let placeholder = token.placeholder();
            if ret.contains(&placeholder) {
                ret = ret.replace(&placeholder, value);
            }
        }

        ret
    }

    pub fn queue_table_name(&self) -> &str {
        self.get(Token::QueueTableName)
    }

    pub fn results_queue_table_name(&self) -> &str {
        self.get(Token::ResultsQueueTableName)
    }

    pub fn execution_time_stats_table_name(&self) -> &str {
        self.get(Token::ExecutionTimeStatsTableName)
    }

    pub fn metrics_table_name(&self) -> &str {
        self.get(Token::MetricsTableName)
    }

    pub fn new_task_notification_channel_name(&self) -> &str {
        self.get(Token::NewTaskNotificationChannelName)
    }

    pub fn dequeue_function_name(&self) -> &str {
        self.get(Token::DequeueFunctionName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve() {
        let mapping = Mapping::new();
        assert_eq!(mapping.queue_table_name(), "sk_tasks_queue_t");
        assert_eq!(mapping.dequeue_function_name(), "sk_try_dequeue_task");
        assert!(!mapping.is_assigned(Token::QueueTableName));
    }

    #[test]
    fn expand_replaces_every_occurrence() {
        let mapping = Mapping::new().with(Token::QueueTableName, "jobs");
        assert_eq!(
            mapping.expand("prefix $queue_table_name$ and $queue_table_name$_id suffix"),
            "prefix jobs and jobs_id suffix"
        );
    }

    #[test]
    fn expand_every_token() {
        let mapping = Mapping::new()
            .with(Token::ResultsQueueTableName, "results")
            .with(Token::MetricsTableName, "metrics");

        for token in Token::ALL {
            let expanded = mapping.expand(&format!("prefix {} suffix", token.placeholder()));
            assert_eq!(expanded, format!("prefix {} suffix", mapping.get(token)));
            assert_eq!(mapping.expand(&expanded), expanded);
        }
    }

    #[test]
    fn expand_leaves_unknown_placeholders() {
        let mapping = Mapping::new();
        assert_eq!(
            mapping.expand("$body$ $queue_table_name$ $$"),
            "$body$ sk_tasks_queue_t $$"
        );
    }

    #[test]
    fn expansion_order_is_fixed() {
        // The value of the first token introduces the placeholder of a later
        // one, which is then expanded too.
        let mapping = Mapping::new()
            .with(Token::QueueTableName, "$metrics_table_name$_q")
            .with(Token::MetricsTableName, "m");
        assert_eq!(mapping.expand("$queue_table_name$"), "m_q");

        // The reverse direction is not revisited.
        let mapping = Mapping::new()
            .with(Token::QueueTableName, "q")
            .with(Token::MetricsTableName, "$queue_table_name$");
        assert_eq!(mapping.expand("$metrics_table_name$"), "$queue_table_name$");
    }

    #[test]
    fn token_names_round_trip() {
        for token in Token::ALL {
            assert_eq!(Token::from_name(token.name()), Some(token));
        }
        assert_eq!(Token::from_name("unknown_table_name"), None);
    }
}
