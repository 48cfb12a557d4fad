//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the load/edit/aggregate and startup carry-over calls to Dart.
//! - Flatten core types into plain envelopes with `ok` + `message`.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.
//! - Every edit is persisted before the call returns.

use checklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, init_logging_for,
    parse_date_key, ping as ping_inner, Completion, DayEdit, DayRecord, DayService, FileDayStore,
    ServiceResult, StoreConfig,
};
use chrono::{Local, NaiveDate};
use log::error;
use std::sync::OnceLock;

/// Upper bound of the bucketed completion form.
pub const COMPLETION_BUCKET_MAX: u32 = 5;

static STORE_CONFIG: OnceLock<StoreConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling logs.
/// - Returns an empty string on success, the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Initializes logging under `<data_dir>/logs` at the build default level.
///
/// Returns an empty string on success, the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_default_logging() -> String {
    match init_logging_for(&resolve_store_config()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One checklist row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub text: String,
    pub done: bool,
    pub carried: bool,
}

/// Day checklist envelope returned by load and edit calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResponse {
    pub ok: bool,
    /// Echo of the requested date.
    pub date: String,
    /// Rows in display order; empty on failure.
    pub tasks: Vec<TaskItem>,
    /// Drives the "(has carry-over tasks)" header hint.
    pub has_carried: bool,
    pub message: String,
}

impl DayResponse {
    fn success(date: String, record: DayRecord) -> Self {
        let has_carried = record.has_carried();
        let tasks = record
            .into_tasks()
            .into_iter()
            .map(|task| TaskItem {
                text: task.text,
                done: task.done,
                carried: task.carried,
            })
            .collect();
        Self {
            ok: true,
            date,
            tasks,
            has_carried,
            message: String::new(),
        }
    }

    fn failure(date: String, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            date,
            tasks: Vec::new(),
            has_carried: false,
            message: message.into(),
        }
    }
}

/// Result of the startup carry-over call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarryOverResponse {
    pub ok: bool,
    /// `no_previous_day|nothing_to_carry|already_applied|applied`, empty on failure.
    pub outcome: String,
    pub forwarded: u32,
    pub message: String,
}

/// Completion metric for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    pub date: String,
    /// Checked entered tasks, `-1` when nothing was entered.
    pub done: i64,
    /// Entered tasks, `-1` when nothing was entered.
    pub total: i64,
    /// `done` clamped to `0..=COMPLETION_BUCKET_MAX`, `-1` when nothing was entered.
    pub bucket: i64,
}

/// Completion envelope for a single date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCompletionResponse {
    pub ok: bool,
    /// Sentinel values when `ok` is false.
    pub item: CompletionItem,
    pub message: String,
}

/// Completion metrics for a calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCompletionResponse {
    pub ok: bool,
    pub items: Vec<CompletionItem>,
    pub message: String,
}

/// Runs carry-over for the local current date.
///
/// # FFI contract
/// - Call once at startup, before the first `day_load` of today.
/// - Repeated calls on the same day are no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn carry_over_today() -> CarryOverResponse {
    run_carry_over(Local::now().date_naive())
}

/// Runs carry-over treating `date` as today.
#[flutter_rust_bridge::frb(sync)]
pub fn carry_over_for(date: String) -> CarryOverResponse {
    match parse_date_key(&date) {
        Some(today) => run_carry_over(today),
        None => CarryOverResponse {
            ok: false,
            outcome: String::new(),
            forwarded: 0,
            message: invalid_date_message(&date),
        },
    }
}

/// Loads the checklist for `date`, creating and persisting the blank
/// template when the day has never been opened.
#[flutter_rust_bridge::frb(sync)]
pub fn day_load(date: String) -> DayResponse {
    let Some(day) = parse_date_key(&date) else {
        let message = invalid_date_message(&date);
        return DayResponse::failure(date, message);
    };
    match with_day_service(|service| service.load_or_create(day)) {
        Ok(record) => DayResponse::success(date, record),
        Err(err) => DayResponse::failure(date, format!("day_load failed: {err}")),
    }
}

/// Replaces the text of row `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn day_set_text(date: String, index: u32, text: String) -> DayResponse {
    apply_day_edit(
        "day_set_text",
        date,
        DayEdit::SetText {
            index: index as usize,
            text,
        },
    )
}

/// Checks or unchecks row `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn day_set_done(date: String, index: u32, done: bool) -> DayResponse {
    apply_day_edit(
        "day_set_done",
        date,
        DayEdit::SetDone {
            index: index as usize,
            done,
        },
    )
}

/// Appends an empty row.
#[flutter_rust_bridge::frb(sync)]
pub fn day_add_task(date: String) -> DayResponse {
    apply_day_edit("day_add_task", date, DayEdit::AddTask)
}

/// Removes row `index`.
#[flutter_rust_bridge::frb(sync)]
pub fn day_remove_task(date: String, index: u32) -> DayResponse {
    apply_day_edit(
        "day_remove_task",
        date,
        DayEdit::RemoveTask {
            index: index as usize,
        },
    )
}

/// Moves row `from` to position `to` (drag-and-drop drop target).
#[flutter_rust_bridge::frb(sync)]
pub fn day_reorder_task(date: String, from: u32, to: u32) -> DayResponse {
    apply_day_edit(
        "day_reorder_task",
        date,
        DayEdit::Reorder {
            from: from as usize,
            to: to as usize,
        },
    )
}

/// Completion metric for `date`; never creates the day.
///
/// Invalid dates and store failures (including a malformed record) report
/// `ok = false`; `NoTasks` is only returned for a readable day.
#[flutter_rust_bridge::frb(sync)]
pub fn day_completion(date: String) -> DayCompletionResponse {
    let Some(day) = parse_date_key(&date) else {
        let message = invalid_date_message(&date);
        return DayCompletionResponse {
            ok: false,
            item: to_completion_item(date, Completion::NoTasks),
            message,
        };
    };
    match with_day_service(|service| service.completion(day)) {
        Ok(completion) => DayCompletionResponse {
            ok: true,
            item: to_completion_item(date, completion),
            message: String::new(),
        },
        Err(err) => {
            error!("event=day_completion module=ffi status=error error={err}");
            DayCompletionResponse {
                ok: false,
                item: to_completion_item(date, Completion::NoTasks),
                message: format!("day_completion failed: {err}"),
            }
        }
    }
}

/// Completion metrics for every day of `month` in `year`.
#[flutter_rust_bridge::frb(sync)]
pub fn month_completion(year: i32, month: u32) -> MonthCompletionResponse {
    let Some((first, last)) = month_bounds(year, month) else {
        return MonthCompletionResponse {
            ok: false,
            items: Vec::new(),
            message: format!("invalid month {year}-{month}"),
        };
    };
    match with_day_service(|service| service.completion_range(first, last)) {
        Ok(range) => MonthCompletionResponse {
            ok: true,
            items: range
                .into_iter()
                .map(|(day, completion)| {
                    to_completion_item(checklist_core::date_key(day), completion)
                })
                .collect(),
            message: String::new(),
        },
        Err(err) => MonthCompletionResponse {
            ok: false,
            items: Vec::new(),
            message: format!("month_completion failed: {err}"),
        },
    }
}

fn run_carry_over(today: NaiveDate) -> CarryOverResponse {
    match with_day_service(|service| service.carry_over(today)) {
        Ok(outcome) => CarryOverResponse {
            ok: true,
            outcome: outcome.label().to_string(),
            forwarded: u32::try_from(outcome.forwarded()).unwrap_or(u32::MAX),
            message: String::new(),
        },
        Err(err) => CarryOverResponse {
            ok: false,
            outcome: String::new(),
            forwarded: 0,
            message: format!("carry_over failed: {err}"),
        },
    }
}

fn apply_day_edit(operation: &str, date: String, edit: DayEdit) -> DayResponse {
    let Some(day) = parse_date_key(&date) else {
        let message = invalid_date_message(&date);
        return DayResponse::failure(date, message);
    };
    match with_day_service(|service| service.apply_edit(day, &edit)) {
        Ok(record) => DayResponse::success(date, record),
        Err(err) => DayResponse::failure(date, format!("{operation} failed: {err}")),
    }
}

fn to_completion_item(date: String, completion: Completion) -> CompletionItem {
    let (done, total) = completion.as_pair();
    CompletionItem {
        date,
        done,
        total,
        bucket: completion.bucket(COMPLETION_BUCKET_MAX),
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

fn invalid_date_message(date: &str) -> String {
    format!("invalid date `{date}`; expected YYYY-MM-DD")
}

fn resolve_store_config() -> StoreConfig {
    STORE_CONFIG.get_or_init(StoreConfig::from_env).clone()
}

fn with_day_service<T>(
    f: impl FnOnce(&DayService<FileDayStore>) -> ServiceResult<T>,
) -> Result<T, String> {
    let store = FileDayStore::new(resolve_store_config())
        .map_err(|err| format!("store init failed: {err}"))?;
    let service = DayService::new(store);
    f(&service).map_err(|err| err.to_string())
}
