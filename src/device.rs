//! PLC device addressing rules shared by the edit dialogs.

use once_cell::sync::Lazy;
use regex::Regex;

/// Timer preset bounds in timebase ticks.
pub const TIMER_PRESET_MIN: i32 = 0;
pub const TIMER_PRESET_MAX: i32 = 32767;
/// Counter preset bounds in counts.
pub const COUNTER_PRESET_MIN: i32 = 0;
pub const COUNTER_PRESET_MAX: i32 = 32767;

/// Ladder element kinds that open an address editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceType {
    ContactA,
    ContactB,
    CoilStd,
    CoilRev,
    TimerTon,
    CounterCtu,
    Rst,
    Zrst,
}

impl DeviceType {
    /// Display name used in dialog titles and captions.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::ContactA => "CONTACT_A",
            DeviceType::ContactB => "CONTACT_B",
            DeviceType::CoilStd => "COIL_STD",
            DeviceType::CoilRev => "COIL_REV",
            DeviceType::TimerTon => "TIMER_TON",
            DeviceType::CounterCtu => "COUNTER_CTU",
            DeviceType::Rst => "RST",
            DeviceType::Zrst => "ZRST",
        }
    }

    /// Address prefixes accepted for this element, if restricted.
    fn valid_prefixes(&self) -> Option<&'static str> {
        match self {
            DeviceType::ContactA | DeviceType::ContactB => Some("XYMLTC"),
            DeviceType::CoilStd | DeviceType::CoilRev => Some("YM"),
            DeviceType::TimerTon => Some("T"),
            DeviceType::CounterCtu => Some("C"),
            DeviceType::Rst | DeviceType::Zrst => None,
        }
    }
}

static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([XYMLTCD])(\d+)$").expect("address regex"));
static RST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([TC])(\d+)$").expect("rst regex"));
static ZRST_CHARSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[TC0-9,\s-]*$").expect("zrst charset regex"));
static ZRST_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([TC])(\d+)-(\d+)$").expect("zrst range regex"));

/// Validate a device address for the given ladder element.
///
/// The address is trimmed and upper-cased before checking. Returns the
/// user-facing error message on failure.
pub fn validate_address(device_type: DeviceType, address: &str) -> Result<(), String> {
    let address = address.trim().to_uppercase();
    if address.is_empty() {
        return Err("ID cannot be empty.".to_string());
    }

    match device_type {
        DeviceType::Rst => return validate_rst_address(&address),
        DeviceType::Zrst => return validate_zrst_address(&address),
        _ => {}
    }

    let Some(caps) = ADDRESS_RE.captures(&address) else {
        return Err("Format error. Use e.g., X0, M100.".to_string());
    };
    let prefix = caps.get(1).map_or("", |m| m.as_str());
    let digits = caps.get(2).map_or("", |m| m.as_str());

    if let Some(valid) = device_type.valid_prefixes() {
        if !valid.contains(prefix) {
            return Err(format!("'{}' is not valid for {}.", prefix, device_type.label()));
        }
    }

    match prefix {
        // X/Y are octal addresses: digits 0-7, 0-377.
        "X" | "Y" => {
            if digits.chars().any(|c| !('0'..='7').contains(&c)) {
                return Err(format!("{prefix} must use octal digits (0-7)."));
            }
            let number: u32 = digits
                .parse()
                .map_err(|_| format!("{prefix} number must be 0-377 (octal)."))?;
            if number > 377 {
                return Err(format!("{prefix} number must be 0-377 (octal)."));
            }
        }
        "T" => check_range(digits, 255, "Timer number must be 0-255.")?,
        "C" => check_range(digits, 255, "Counter number must be 0-255.")?,
        "M" => check_range(digits, 7999, "M number must be 0-7999.")?,
        _ => {}
    }

    Ok(())
}

fn check_range(digits: &str, max: u32, message: &str) -> Result<(), String> {
    let number: u32 = digits.parse().map_err(|_| message.to_string())?;
    if number > max {
        return Err(message.to_string());
    }
    Ok(())
}

/// RST targets a single timer or counter.
pub fn validate_rst_address(address: &str) -> Result<(), String> {
    let Some(caps) = RST_RE.captures(address) else {
        return Err("RST target must be T or C (e.g., T5).".to_string());
    };
    let digits = caps.get(2).map_or("", |m| m.as_str());
    check_range(digits, 255, "RST target number must be 0-255.")
}

/// ZRST takes a comma list of timers/counters and `T0-10` style ranges.
pub fn validate_zrst_address(address: &str) -> Result<(), String> {
    if !ZRST_CHARSET_RE.is_match(address) {
        return Err("Invalid chars for ZRST. Use T,C,0-9,-,,".to_string());
    }
    if address.is_empty() {
        return Err("ZRST address cannot be empty.".to_string());
    }

    for part in address.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part.contains('-') {
            let Some(caps) = ZRST_RANGE_RE.captures(part) else {
                return Err(format!("Invalid range format: {part}"));
            };
            let start: u32 = caps[2].parse().map_err(|_| format!("Range {part}: numbers must be 0-255"))?;
            let end: u32 = caps[3].parse().map_err(|_| format!("Range {part}: numbers must be 0-255"))?;
            if start >= end {
                return Err(format!("Invalid range {part}: start >= end"));
            }
            if start > 255 || end > 255 {
                return Err(format!("Range {part}: numbers must be 0-255"));
            }
        } else {
            let Some(caps) = RST_RE.captures(part) else {
                return Err(format!("Invalid address format: {part}"));
            };
            let number: u32 = caps[2].parse().map_err(|_| format!("Address {part}: number must be 0-255"))?;
            if number > 255 {
                return Err(format!("Address {part}: number must be 0-255"));
            }
        }
    }

    Ok(())
}
