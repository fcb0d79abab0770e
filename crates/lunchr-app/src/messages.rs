//! Fixed user-facing copy and the error-to-copy mapping.
//!
//! Every failure in the taxonomy is surfaced as exactly one of these
//! strings; mapping goes through typed error variants, never through
//! substring matching on error text.

use lunchr_api::RouletteError;
use lunchr_geo::GeolocationError;

use crate::controller::ControllerError;

pub const SEARCH_GENERIC_FAILURE: &str = "レストラン検索中にエラーが発生しました";
pub const SEARCH_NETWORK_FAILURE: &str =
    "ネットワークエラーが発生しました。インターネット接続を確認してください。";
pub const SEARCH_SERVER_ERROR: &str =
    "サーバーエラーが発生しました。しばらく時間を置いて再度お試しください。";
pub const SEARCH_RATE_LIMITED: &str =
    "アクセスが集中しています。しばらく時間を置いて再度お試しください。";
pub const SEARCH_MALFORMED_RESULT: &str = "レストランデータが正しくありません";
pub const AREA_REQUIRED: &str = "エリアを選択してください";
pub const UNEXPECTED_FAILURE: &str = "予期しないエラーが発生しました。もう一度お試しください。";
pub const UNLOAD_WARNING: &str = "レストラン検索中です。終了しますか？";

pub const GPS_UNSUPPORTED: &str = "❌ この環境は位置情報の取得に対応していません";
pub const GPS_FETCHING: &str = "📡 位置情報を取得中...";
pub const GPS_PERMISSION_DENIED: &str = "❌ 位置情報の使用が拒否されました";
pub const GPS_UNAVAILABLE: &str = "❌ 位置情報を取得できません";
pub const GPS_TIMEOUT: &str = "❌ 位置情報の取得がタイムアウトしました";
pub const GPS_FAILED: &str = "❌ 位置情報の取得に失敗しました";

/// Status line shown after a successful position fix.
#[must_use]
pub fn gps_success(accuracy_m: f64) -> String {
    format!("✅ GPS位置を取得しました（精度: {}m）", accuracy_m.round())
}

/// Maps a failed search to its banner text.
///
/// Server-provided `message`/`suggestion` pairs are joined with a newline;
/// everything else uses fixed copy keyed on the error variant.
#[must_use]
pub fn search_failure_message(err: &ControllerError) -> String {
    match err {
        ControllerError::AreaNotSelected => AREA_REQUIRED.to_owned(),
        ControllerError::Client(client_err) => match client_err {
            RouletteError::Network(_) => SEARCH_NETWORK_FAILURE.to_owned(),
            RouletteError::Http { status: 429, .. } => SEARCH_RATE_LIMITED.to_owned(),
            RouletteError::Http { status, .. } if (500..=599).contains(status) => {
                SEARCH_SERVER_ERROR.to_owned()
            }
            RouletteError::Http { .. } => SEARCH_GENERIC_FAILURE.to_owned(),
            RouletteError::Api {
                message,
                suggestion,
            } => {
                let mut text = message
                    .clone()
                    .unwrap_or_else(|| SEARCH_GENERIC_FAILURE.to_owned());
                if let Some(suggestion) = suggestion {
                    text.push('\n');
                    text.push_str(suggestion);
                }
                text
            }
            RouletteError::MissingRestaurant { message } => message
                .clone()
                .unwrap_or_else(|| SEARCH_MALFORMED_RESULT.to_owned()),
            RouletteError::Deserialize { .. } => SEARCH_MALFORMED_RESULT.to_owned(),
        },
    }
}

/// Maps a categorized positioning failure to its status text.
#[must_use]
pub fn gps_failure_message(err: &GeolocationError) -> &'static str {
    match err {
        GeolocationError::PermissionDenied => GPS_PERMISSION_DENIED,
        GeolocationError::PositionUnavailable => GPS_UNAVAILABLE,
        GeolocationError::Timeout => GPS_TIMEOUT,
        GeolocationError::Unknown(_) => GPS_FAILED,
    }
}
