#[macro_export]
macro_rules! emit_filter_event {
    ($filter:expr, $action:expr, $detail:expr) => {{
        use $crate::events::{dispatcher, model::*};
        let mut meta = dispatcher::meta("filter", LogLevel::Info);
        meta.corr_id = Some(dispatcher::correlation_id());
        let evt = FilterEvent {
            meta,
            filter: $filter.to_string(),
            action: $action.to_string(),
            detail: $detail,
        };
        dispatcher::emit(LogEvent::Filter(evt));
    }};
}
