//! Constant registry for the Bmob REST API.
//!
//! Every literal the server matches on lives here. Values are exact,
//! case included; the server does plain string comparison.
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────────────┐
//! │ Group      │ Used for                                     │
//! ├────────────┼──────────────────────────────────────────────┤
//! │ header     │ HTTP request headers                         │
//! │ key        │ JSON field names in objects and responses    │
//! │ type_tag   │ values of `__type` (extended JSON types)     │
//! │ op         │ values of `__op` (field mutation operators)  │
//! │ class      │ built-in class names                         │
//! │ path       │ resource path segments                       │
//! └────────────┴──────────────────────────────────────────────┘
//! ```

/// Default API host.
pub const HOST: &str = "https://api.bmob.cn";

/// API version prefix prepended to every resource path.
pub const API_VERSION_PATH: &str = "/1";

/// HTTP header names.
pub mod header {
    /// Application ID header.
    pub const APP_ID: &str = "X-Bmob-Application-Id";
    /// REST API key header.
    pub const REST_API_KEY: &str = "X-Bmob-REST-API-Key";
    /// Master key header. Bypasses ACLs, server-side use only.
    pub const MASTER_KEY: &str = "X-Bmob-Master-Key";
    /// Session token of an authenticated user.
    pub const SESSION_TOKEN: &str = "X-Bmob-Session-Token";
}

/// JSON field names.
pub mod key {
    /// Class name of an object, also used inside Pointer and Relation values.
    pub const CLASS_NAME: &str = "className";
    /// Object ID.
    pub const OBJECT_ID: &str = "objectId";
    /// Creation timestamp.
    pub const CREATED_AT: &str = "createdAt";
    /// Last modification timestamp.
    pub const UPDATED_AT: &str = "updatedAt";
    /// Session token on user objects.
    pub const SESSION_TOKEN: &str = "sessionToken";
    /// Top-level array in query responses.
    pub const RESULTS: &str = "results";
    /// Operator tag.
    pub const OP: &str = "__op";
    /// Type tag.
    pub const TYPE: &str = "__type";
    /// Numeric argument of `Increment`.
    pub const AMOUNT: &str = "amount";
    /// Array argument of the array and relation operators.
    pub const OBJECTS: &str = "objects";
    /// ISO-8601 string of a `Date`.
    pub const ISO: &str = "iso";
    /// Base64 payload of `Bytes`.
    pub const BASE64: &str = "base64";
    /// Latitude of a `GeoPoint`.
    pub const LATITUDE: &str = "latitude";
    /// Longitude of a `GeoPoint`.
    pub const LONGITUDE: &str = "longitude";
    /// Name of a `File`.
    pub const NAME: &str = "name";
    /// Download URL the server attaches to a `File`.
    pub const URL: &str = "url";
}

/// Values of the `__type` field.
pub mod type_tag {
    /// A full embedded object.
    pub const OBJECT: &str = "Object";
    /// Reference to another object.
    pub const POINTER: &str = "Pointer";
    /// Base64-encoded binary data.
    pub const BYTES: &str = "Bytes";
    /// Date/time.
    pub const DATE: &str = "Date";
    /// Latitude/longitude pair.
    pub const GEO_POINT: &str = "GeoPoint";
    /// Stored file.
    pub const FILE: &str = "File";
    /// To-many relation.
    pub const RELATION: &str = "Relation";
}

/// Values of the `__op` field.
pub mod op {
    /// Atomic numeric increment.
    pub const INCREMENT: &str = "Increment";
    /// Remove the field.
    pub const DELETE: &str = "Delete";
    /// Append to an array.
    pub const ADD: &str = "Add";
    /// Add pointers to a relation.
    pub const ADD_RELATION: &str = "AddRelation";
    /// Remove pointers from a relation.
    pub const REMOVE_RELATION: &str = "RemoveRelation";
    /// Append to an array, skipping values already present.
    pub const ADD_UNIQUE: &str = "AddUnique";
    /// Remove all occurrences from an array.
    pub const REMOVE: &str = "Remove";
}

/// Built-in class names.
pub mod class {
    /// User class, as referenced by pointers.
    pub const USER: &str = "_User";
    /// Installation class.
    pub const INSTALLATION: &str = "_Installation";
}

/// Resource path segments (without slashes).
pub mod path {
    /// Remote configuration.
    pub const CONFIG: &str = "config";
    /// Objects, grouped by class.
    pub const CLASSES: &str = "classes";
    /// Device installations.
    pub const INSTALLATIONS: &str = "installations";
    /// Users.
    pub const USERS: &str = "users";
    /// Stored files.
    pub const FILES: &str = "files";
    /// Push notification submission.
    pub const PUSH: &str = "push";
    /// Cloud functions.
    pub const FUNCTIONS: &str = "functions";
    /// Batched sub-requests.
    pub const BATCH: &str = "batch";
    /// User login.
    pub const LOGIN: &str = "login";
    /// Password reset request.
    pub const REQUEST_PASSWORD_RESET: &str = "requestPasswordReset";
}
