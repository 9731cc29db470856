//! Channel token parsing and sparse channel maps.
//!
//! Callers describe DMX levels as `"<channel>,<value>"` tokens with 0-based
//! channel numbers. The map shifts channels to the 1-based DMX convention on
//! entry and keeps them that way; the shift happens exactly once, at this
//! boundary. Duplicate channels are last-write-wins.
//!
//! Parsing is pure and contains no I/O; frame materialization lives here too
//! because the frame is fully determined by the map.

use std::collections::BTreeMap;

use thiserror::Error;

/// Highest addressable DMX channel in a universe.
pub const MAX_CHANNELS: u16 = 512;

/// Errors raised while building a [`ChannelMap`] from tokens.
///
/// Each variant carries the offending token so callers can report it
/// verbatim. These are argument errors: nothing has touched the network when
/// they occur.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("malformed channel token '{token}': expected '<channel>,<value>'")]
    Malformed { token: String },
    #[error("channel value {value} out of range 0..=255 in '{token}'")]
    ValueOutOfRange { token: String, value: i64 },
    #[error("channel {channel} out of range 1..=512 in '{token}'")]
    ChannelOutOfRange { token: String, channel: i64 },
}

/// Sparse mapping from 1-based DMX channel to intensity.
///
/// Backed by a `BTreeMap` so iteration order and the highest-channel lookup
/// are deterministic. Built once per send and handed to the encoder as-is.
///
/// # Examples
/// ```
/// use artsend_core::ChannelMap;
///
/// let map = ChannelMap::from_tokens(["0,255", "4,7"])?;
/// assert_eq!(map.get(1), Some(255));
/// assert_eq!(map.highest_channel(), 5);
/// # Ok::<(), artsend_core::ChannelError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMap {
    values: BTreeMap<u16, u8>,
}

impl ChannelMap {
    /// Parse `"<0-based channel>,<value>"` tokens into a map.
    ///
    /// Validation order per token: value in `0..=255` first, then the
    /// shifted (1-based) channel in `1..=512`. Later tokens overwrite
    /// earlier ones for the same channel.
    ///
    /// # Examples
    /// ```
    /// use artsend_core::ChannelMap;
    ///
    /// let map = ChannelMap::from_tokens(["3,10", "3,20"])?;
    /// assert_eq!(map.get(4), Some(20));
    /// # Ok::<(), artsend_core::ChannelError>(())
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ChannelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = BTreeMap::new();
        for token in tokens {
            let token = token.as_ref();
            let (channel, value) = parse_token(token)?;
            values.insert(channel, value);
        }
        Ok(Self { values })
    }

    /// Intensity for a 1-based channel, if set.
    pub fn get(&self, channel: u16) -> Option<u8> {
        self.values.get(&channel).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Highest 1-based channel present, or 0 for an empty map.
    pub fn highest_channel(&self) -> u16 {
        self.values.keys().next_back().copied().unwrap_or(0)
    }

    /// Materialize the dense DMX frame covered by this map.
    ///
    /// The frame length equals [`Self::highest_channel`]; unset channels
    /// below it are zero. The frame is deliberately not padded to 512.
    ///
    /// # Examples
    /// ```
    /// use artsend_core::ChannelMap;
    ///
    /// let map = ChannelMap::from_tokens(["4,7"])?;
    /// assert_eq!(map.to_frame(), vec![0, 0, 0, 0, 7]);
    /// # Ok::<(), artsend_core::ChannelError>(())
    /// ```
    pub fn to_frame(&self) -> Vec<u8> {
        let mut frame = vec![0u8; self.highest_channel() as usize];
        for (channel, value) in self.iter() {
            // channel is 1-based and <= frame length by construction
            frame[channel as usize - 1] = value;
        }
        frame
    }

    /// Iterate `(channel, value)` pairs in ascending channel order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u8)> + '_ {
        self.values.iter().map(|(&channel, &value)| (channel, value))
    }
}

fn parse_token(token: &str) -> Result<(u16, u8), ChannelError> {
    let malformed = || ChannelError::Malformed {
        token: token.to_string(),
    };

    let parts: Vec<&str> = token.split(',').collect();
    let [raw_channel, raw_value] = parts.as_slice() else {
        return Err(malformed());
    };
    let raw_channel: i64 = raw_channel.trim().parse().map_err(|_| malformed())?;
    let value: i64 = raw_value.trim().parse().map_err(|_| malformed())?;

    if !(0..=255).contains(&value) {
        return Err(ChannelError::ValueOutOfRange {
            token: token.to_string(),
            value,
        });
    }

    // Input channels are 0-based; DMX channels are 1-based.
    let channel = raw_channel + 1;
    if !(1..=i64::from(MAX_CHANNELS)).contains(&channel) {
        return Err(ChannelError::ChannelOutOfRange {
            token: token.to_string(),
            channel,
        });
    }

    Ok((channel as u16, value as u8))
}
