// 缓存模块
// 包含缓存键定义和操作逻辑

pub mod keys;
pub mod operations;

// 重新导出常用类型，方便其他模块使用
pub use operations::user::UserCacheOperations;
