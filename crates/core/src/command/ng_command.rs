use serde::Serialize;

/// A fully assembled `ng` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgCommand {
    pub program: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
}

impl NgCommand {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            program: "ng".to_string(),
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: String) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Single-line form, quoting arguments that contain whitespace
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.chars().any(char::is_whitespace) {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}

impl std::fmt::Display for NgCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_shell_command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command() {
        let command = NgCommand::new(vec!["g".into(), "component".into(), "hello".into()]);
        assert_eq!(command.to_shell_command(), "ng g component hello");
    }

    #[test]
    fn test_quotes_whitespace() {
        let command = NgCommand::new(vec![
            "g".into(),
            "class".into(),
            "hello".into(),
            "--type".into(),
            "view model".into(),
        ]);
        insta::assert_snapshot!(command.to_string(), @"ng g class hello --type 'view model'");
    }
}
