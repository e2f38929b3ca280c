pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个对象缓存插件，在程序启动时自动注册到缓存注册表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ty) => {
        ::paste::paste! {
            #[::ctor::ctor]
            fn [<__register_object_cache_ $cache_type:snake>]() {
                $crate::cache::register::register_cache_backend(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = <$cache_type>::new()
                                .map_err($crate::errors::ClassTrackError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::CacheInitFuture
                    }),
                );
            }
        }
    };
}
