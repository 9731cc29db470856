//! Art-Net ArtDMX encoding.
//!
//! The encoder assembles one ArtDMX packet: the 8-byte signature, fixed and
//! constant header fields in network byte order, the caller's universe, the
//! frame-length field, and the DMX frame itself. Frames are sized to the
//! highest referenced channel (0..=512 slots), never padded to a full
//! universe.
//!
//! A matching parser decodes packets this encoder produces, so every send
//! can be verified by round-trip. Byte offsets live in `layout`; `writer`
//! owns all buffer indexing so the encoder and parser stay domain-level.
//!
//! Version française (résumé):
//! Le module encode un paquet ArtDMX (signature, en-tête big-endian,
//! univers, longueur, trame DMX de 0 à 512 canaux). Un parseur symétrique
//! permet la vérification aller-retour. Les positions sont dans `layout`,
//! l'indexation dans `writer`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod writer;

mod encoder;

pub use encoder::encode_artdmx;
pub use error::ArtNetError;
pub use parser::{ArtDmx, parse_artdmx};
