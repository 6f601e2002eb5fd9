use derive_new::new;

/// Paging window for listing operations. `limit` and `offset` come straight
/// from the query string with the transport shim supplying the defaults.
#[derive(Debug, Clone, Copy, new)]
pub struct ListOptions {
    pub limit: i64,
    pub offset: i64,
}
