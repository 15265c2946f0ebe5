//! 共通: 実機テスト用ヘルパー
//!
//! `TAGBRIDGE_TEST_PORT` に PN532 のシリアルポートを指定したときだけ
//! 実機に接続する。未設定の環境（CI 等）では `Ok(None)` を返す。

use tagbridge::constants::DEFAULT_BAUDRATE;
use tagbridge::device::{Reader, Ready, SessionTiming};
use tagbridge::Result;

pub const PORT_ENV: &str = "TAGBRIDGE_TEST_PORT";

/// Open and handshake the reader on `TAGBRIDGE_TEST_PORT`.
///
/// - Ok(Some(reader)) : handshake done
/// - Ok(None) : no port configured
/// - Err(e) : the port could not be opened
pub fn open_ready_reader() -> Result<Option<Reader<Ready>>> {
    let Ok(port) = std::env::var(PORT_ENV) else {
        return Ok(None);
    };
    let reader = Reader::open(&port, DEFAULT_BAUDRATE, SessionTiming::default())?.handshake()?;
    Ok(Some(reader))
}
