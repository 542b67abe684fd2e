// Wire protocol shared by the catalog process and its clients

pub mod protocol;

pub use protocol::{
    CatalogRequest, CatalogResponse, ErrorKind, ListQuery, MediaPayload, MediaPayloads,
    VideoPayload,
};
