/// Property-based tests for how values are rendered into `Set` commands.
///
/// The editing tool parses the text back into the entry's existing type, so
/// every scalar rendering has to survive that parse unchanged:
/// - strings are passed through verbatim (no quoting, no escaping)
/// - finite numbers parse back to the identical `f64`
/// - booleans are `true`/`false`
/// - containers never render
use proptest::prelude::*;
use plister::{render_value, CommandOutput, CommandRunner, PlistEditor, PlistValue, ToolCommand};
use std::cell::RefCell;

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,15}").unwrap()
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,30}",
        prop::string::string_regex("[a-zA-Z0-9:;\"'$&|<>{}\\-\\. ]{0,20}").unwrap(),
        Just(String::new()),
        Just("true".to_string()),
        Just("1234.56".to_string()),
        Just("caf\u{00e9}".to_string()),
    ]
}

fn arb_finite_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite", |n| n.is_finite()),
        (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64),
        (-100_000_000i64..100_000_000i64, 1u32..5u32)
            .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32)),
    ]
}

#[derive(Default)]
struct Capture(RefCell<Vec<String>>);

impl CommandRunner for Capture {
    fn run(&self, command: &ToolCommand) -> std::io::Result<CommandOutput> {
        self.0
            .borrow_mut()
            .push(command.args[1].to_string_lossy().into_owned());
        Ok(CommandOutput {
            status: Some(0),
            ..Default::default()
        })
    }
}

proptest! {
    #[test]
    fn strings_render_verbatim(text in arb_text()) {
        prop_assert_eq!(render_value(&PlistValue::from(text.clone())), Some(text));
    }

    #[test]
    fn finite_numbers_parse_back_exactly(n in arb_finite_f64()) {
        let rendered = render_value(&PlistValue::Number(n)).unwrap();
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn booleans_render_as_literals(b in any::<bool>()) {
        let rendered = render_value(&PlistValue::Boolean(b)).unwrap();
        prop_assert_eq!(rendered.parse::<bool>().unwrap(), b);
    }

    #[test]
    fn set_command_is_key_then_value(key in arb_key(), text in arb_text()) {
        let runner = Capture::default();
        PlistEditor::with_runner(&runner)
            .set_value(text.as_str(), &key, "f.plist")
            .unwrap();
        let issued = runner.0.borrow();
        prop_assert_eq!(issued.len(), 1);
        prop_assert_eq!(&issued[0], &format!("Set :{key} {text}"));
    }

    #[test]
    fn arrays_never_render(items in prop::collection::vec(arb_text(), 0..5)) {
        let value = PlistValue::Array(items.into_iter().map(PlistValue::from).collect());
        prop_assert!(render_value(&value).is_none());
    }
}

#[test]
fn non_finite_numbers_do_not_render() {
    assert!(render_value(&PlistValue::Number(f64::NAN)).is_none());
    assert!(render_value(&PlistValue::Number(f64::INFINITY)).is_none());
}

#[test]
fn whole_numbers_render_without_fraction() {
    assert_eq!(render_value(&PlistValue::from(5_i32)).as_deref(), Some("5"));
    assert_eq!(render_value(&PlistValue::from(-0.5)).as_deref(), Some("-0.5"));
}

#[test]
fn dates_render_as_rfc3339() {
    use chrono::{TimeZone, Utc};
    let date = Utc.with_ymd_and_hms(2019, 7, 7, 12, 30, 0).unwrap();
    assert_eq!(
        render_value(&PlistValue::from(date)).as_deref(),
        Some("2019-07-07T12:30:00Z")
    );
}
