use std::time::{SystemTime, UNIX_EPOCH};

/// Session variables feeding document id generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdVariables {
    /// Server-unique prefix embedded in every generated id.
    pub prefix: u16,

    /// `auto_increment_offset`: where the per-instance serial starts.
    pub offset: u16,

    /// `auto_increment_increment`: how far the serial advances per id.
    pub increment: u16,
}

/// Source of unique document identifiers.
pub trait IdGenerator {
    /// Returns a new unique identifier string.
    fn generate(&mut self, vars: &IdVariables) -> String;
}

/// Default generator producing 28-hex-char ids laid out as
/// `{prefix:04x}{timestamp:08x}{serial:016x}`.
///
/// The serial starts at `auto_increment_offset` and advances by
/// `auto_increment_increment` per id, so instances sharing a prefix but
/// configured with distinct offsets cannot mint colliding ids.
#[derive(Debug)]
pub struct SerialIdGenerator {
    timestamp: u32,
    serial: Option<u64>,
}

impl SerialIdGenerator {
    pub fn new() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or(0);

        Self {
            timestamp,
            serial: None,
        }
    }
}

impl Default for SerialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SerialIdGenerator {
    fn generate(&mut self, vars: &IdVariables) -> String {
        let step = u64::from(vars.increment).max(1);
        let serial = match self.serial {
            Some(last) => last.wrapping_add(step),
            None => u64::from(vars.offset),
        };
        self.serial = Some(serial);

        format!("{:04x}{:08x}{:016x}", vars.prefix, self.timestamp, serial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: IdVariables = IdVariables {
        prefix: 0x1001,
        offset: 3,
        increment: 5,
    };

    #[test]
    fn id_layout() {
        let mut gen = SerialIdGenerator::new();
        let id = gen.generate(&VARS);

        assert_eq!(id.len(), 28);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(id.starts_with("1001"));
        assert!(id.ends_with("0000000000000003"));
    }

    #[test]
    fn serial_advances_by_increment() {
        let mut gen = SerialIdGenerator::new();
        let first = gen.generate(&VARS);
        let second = gen.generate(&VARS);

        assert_ne!(first, second);
        assert!(second.ends_with("0000000000000008"));
    }

    #[test]
    fn zero_increment_still_advances() {
        let mut gen = SerialIdGenerator::new();
        let vars = IdVariables {
            prefix: 0,
            offset: 0,
            increment: 0,
        };

        let first = gen.generate(&vars);
        let second = gen.generate(&vars);
        assert_ne!(first, second);
    }
}
