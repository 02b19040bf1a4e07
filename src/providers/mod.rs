mod taobao;
pub use taobao::{classify, TaobaoProvider, DEFAULT_ENDPOINT};
