#![no_main]

use abacus::{ExpressionDispatcher, NumberFormat, StrategyKind, build_strategies};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(expression) = std::str::from_utf8(rest) else {
        return;
    };

    let format = if selector & 1 == 0 {
        NumberFormat::comma()
    } else {
        NumberFormat::point()
    };
    let kinds = if selector & 2 == 0 {
        [StrategyKind::Sum, StrategyKind::Product]
    } else {
        [StrategyKind::Product, StrategyKind::Sum]
    };
    let strategies = build_strategies(&kinds, format);
    let dispatcher = ExpressionDispatcher::new(&strategies);

    // Must never panic; only Ok or a format error
    let result = dispatcher.evaluate(expression);

    // Unclaimed expressions always fall back to zero
    if dispatcher.select(expression).is_none() {
        assert_eq!(result, Ok(0.0));
    }
});
