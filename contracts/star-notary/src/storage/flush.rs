use crate::*;

impl Contract {
    // Inner per-owner sets flush themselves on every change; only the outer maps are cached here.
    pub(crate) fn flush_state(&mut self) {
        self.stars.flush();
        self.stars_per_owner.flush();
        self.sales.flush();
        self.sales_by_owner.flush();
        self.user_storage.flush();
    }

    #[inline]
    pub(crate) fn storage_usage_flushed(&mut self) -> u64 {
        self.flush_state();
        env::storage_usage()
    }
}
