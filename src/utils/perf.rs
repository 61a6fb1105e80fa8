/// Times `$block` when `DF.log_performance` is on and warns if it ran longer than
/// `$budget_micros`. Evaluates to the block's value either way.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $budget_micros:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let start = web_time::Instant::now();
            let result = $block;
            let elapsed = start.elapsed();
            let budget = std::time::Duration::from_micros($budget_micros);
            if elapsed > budget {
                log::warn!("slow frame section '{}': {:?} (budget {:?})", $name, elapsed, budget);
            }
            result
        } else {
            $block
        }
    }};
}
