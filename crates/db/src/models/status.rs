//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Recording processing job status.
    RecordSetStatus {
        Unknown = 1,
        /// Raw recording received, waiting for rendering.
        Uploaded = 2,
        /// Rendered, waiting for publication.
        Rendered = 3,
        Deleting = 4,
        Deleted = 5,
    }
}

impl RecordSetStatus {
    /// States that still sit in the processing queue.
    pub const PROCESSING: [RecordSetStatus; 2] = [RecordSetStatus::Uploaded, RecordSetStatus::Rendered];
}
