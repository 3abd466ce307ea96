use netb_core::NetBuilderError;
use netb_search::ExplorationMethod;

use crate::error::grammar_error;

/// Parses an exploration method.
///
/// Accepted forms: `evaluation:<net>`, `exhaustive`, `random:<r>`, `full-CBC`,
/// `random-CBC:<r>` and `mixed-CBC:<r>:<nb_full>`.
pub fn parse_exploration_method(text: &str) -> Result<ExplorationMethod, NetBuilderError> {
    let trimmed = text.trim();
    let (name, rest) = trimmed.split_once(':').unwrap_or((trimmed, ""));
    let count = |field: &str| -> Result<usize, NetBuilderError> {
        field
            .trim()
            .parse::<usize>()
            .map_err(|_| {
                grammar_error("exploration_count", "expected a non-negative integer", text)
            })
    };
    let no_argument = |method: ExplorationMethod| {
        if rest.is_empty() {
            Ok(method)
        } else {
            Err(grammar_error("exploration", "this method takes no argument", text))
        }
    };
    match name {
        "evaluation" if !rest.is_empty() => Ok(ExplorationMethod::Evaluation {
            net: rest.to_string(),
        }),
        "exhaustive" => no_argument(ExplorationMethod::Exhaustive),
        "full-CBC" => no_argument(ExplorationMethod::FullCbc),
        "random" => Ok(ExplorationMethod::Random {
            samples: count(rest)?,
        }),
        "random-CBC" => Ok(ExplorationMethod::RandomCbc {
            samples: count(rest)?,
        }),
        "mixed-CBC" => {
            let (samples, full) = rest.split_once(':').ok_or_else(|| {
                grammar_error("exploration", "expected mixed-CBC:<r>:<nb_full>", text)
            })?;
            Ok(ExplorationMethod::MixedCbc {
                samples: count(samples)?,
                full_coordinates: count(full)?,
            })
        }
        _ => Err(grammar_error("exploration", "unknown exploration method", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_parses() {
        assert_eq!(
            parse_exploration_method("exhaustive").expect("x"),
            ExplorationMethod::Exhaustive
        );
        assert_eq!(parse_exploration_method("full-CBC").expect("x"), ExplorationMethod::FullCbc);
        assert_eq!(
            parse_exploration_method("random:20").expect("x"),
            ExplorationMethod::Random { samples: 20 }
        );
        assert_eq!(
            parse_exploration_method("random-CBC:7").expect("x"),
            ExplorationMethod::RandomCbc { samples: 7 }
        );
        assert_eq!(
            parse_exploration_method("mixed-CBC:5:2").expect("x"),
            ExplorationMethod::MixedCbc {
                samples: 5,
                full_coordinates: 2
            }
        );
        assert_eq!(
            parse_exploration_method("evaluation:1/1,1").expect("x"),
            ExplorationMethod::Evaluation {
                net: "1/1,1".to_string()
            }
        );
    }

    #[test]
    fn malformed_methods_are_rejected() {
        for text in ["cbc", "random", "random:x", "mixed-CBC:5", "full-CBC:3", "evaluation"] {
            assert!(parse_exploration_method(text).is_err(), "{text}");
        }
    }
}
