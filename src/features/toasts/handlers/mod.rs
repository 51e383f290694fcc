pub mod toast_handler;

pub use toast_handler::{
    __path_create_toast, __path_dismiss_toast, __path_list_toasts, create_toast, dismiss_toast,
    list_toasts,
};
