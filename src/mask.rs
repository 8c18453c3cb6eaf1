use std::fmt::Display;
use std::str::FromStr;

pub const MASK_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Ignore,
}

impl Channel {
    /// component index inside an RGBA dot this channel is written to
    pub fn destination_index(&self) -> Option<usize> {
        match self {
            Self::Red => Some(0),
            Self::Green => Some(1),
            Self::Blue => Some(2),
            Self::Alpha => Some(3),
            Self::Ignore => None,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Alpha => 'a',
            Self::Ignore => 'x',
        }
    }
}

impl TryFrom<char> for Channel {
    type Error = InvalidMask;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'r' => Ok(Self::Red),
            'g' => Ok(Self::Green),
            'b' => Ok(Self::Blue),
            'a' => Ok(Self::Alpha),
            'x' => Ok(Self::Ignore),
            other => Err(InvalidMask::IllegalCharacter(other)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum InvalidMask {
    WrongLength(usize),
    IllegalCharacter(char),
    NotUnicode,
}

impl Display for InvalidMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(length) => write!(
                f,
                "expected {} characters, but got {}",
                MASK_LENGTH, length
            ),
            Self::IllegalCharacter(character) => write!(
                f,
                "illegal character '{}', allowed are r, g, b, a and x",
                character
            ),
            Self::NotUnicode => write!(f, "not valid unicode"),
        }
    }
}

impl std::error::Error for InvalidMask {}

/// Routes the components of a source dot onto the channels of the output.
///
/// Position `i` of the mask names the output channel the `i`-th component
/// of the source dot is written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMask {
    channels: [Channel; MASK_LENGTH],
}

impl ChannelMask {
    pub fn channels(&self) -> &[Channel; MASK_LENGTH] {
        &self.channels
    }

    /// pairs of (source component index, destination component index),
    /// ignored positions are skipped
    pub fn routes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.channels
            .iter()
            .enumerate()
            .filter_map(|(source, channel)| {
                channel
                    .destination_index()
                    .map(|destination| (source, destination))
            })
    }
}

impl FromStr for ChannelMask {
    type Err = InvalidMask;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let length = raw.chars().count();
        if length != MASK_LENGTH {
            return Err(InvalidMask::WrongLength(length));
        }
        let mut channels = [Channel::Ignore; MASK_LENGTH];
        for (channel, character) in channels.iter_mut().zip(raw.chars()) {
            *channel = Channel::try_from(character)?;
        }
        Ok(Self { channels })
    }
}

impl Display for ChannelMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for channel in &self.channels {
            write!(f, "{}", channel.symbol())?;
        }
        Ok(())
    }
}
