use ng_gen_core::{CliOption, OptionValue};

/// Parse `-o` arguments into options
///
/// `name=value` gives a string, a bare `name` a flag. A name given several
/// times with values becomes one list at the position of its first use.
pub fn parse_options(raw: &[String]) -> Vec<CliOption> {
    let mut options: Vec<CliOption> = Vec::new();

    for arg in raw {
        let (name, value) = match arg.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.to_string())),
            None => (arg.trim(), None),
        };
        let name = name.trim_start_matches('-');
        if name.is_empty() {
            continue;
        }

        let Some(value) = value else {
            options.push(CliOption::flag(name));
            continue;
        };

        let existing = options.iter().position(|o| {
            o.name == name && matches!(o.value, OptionValue::String(_) | OptionValue::List(_))
        });
        match existing {
            Some(index) => {
                let option = &mut options[index];
                let merged = match std::mem::replace(&mut option.value, OptionValue::List(Vec::new())) {
                    OptionValue::String(first) => vec![first, value],
                    OptionValue::List(mut values) => {
                        values.push(value);
                        values
                    }
                    OptionValue::Bool(_) => vec![value],
                };
                option.value = OptionValue::List(merged);
            }
            None => options.push(CliOption::new(name, value)),
        }
    }

    options
}
