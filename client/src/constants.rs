use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used by the service.
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

// Env values read by the credential providers.
pub const CHIME_ACCESS_KEY_ID: &str = "CHIME_ACCESS_KEY_ID";
pub const CHIME_SECRET_ACCESS_KEY: &str = "CHIME_SECRET_ACCESS_KEY";
pub const CHIME_SESSION_TOKEN: &str = "CHIME_SESSION_TOKEN";
pub const CHIMECTL_CONFIG: &str = "CHIMECTL_CONFIG";

/// Fixed deployment constants. The service console API lives on a single
/// host in a single region.
pub const CHIME_HOST: &str = "service.chime.aws.amazon.com";
/// Region the signing scope is bound to.
pub const CHIME_REGION: &str = "us-east-1";
/// Service name the signing scope is bound to.
pub const CHIME_SERVICE: &str = "chime";
/// Base URL requests are issued against.
pub const CHIME_ENDPOINT: &str = "https://service.chime.aws.amazon.com";

/// AsciiSet for [UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
/// as used in query strings.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for encoding a single path segment.
///
/// Same unreserved set as [`QUERY_ENCODE_SET`]; notably `/` IS encoded, so
/// identifiers containing reserved characters stay inside one segment.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
