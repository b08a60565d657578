mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, epoch_ms_to_local_string, long_date_ru, now_timestamp_ms, today_local,
};
