//! Signup, login, profile edit and new-message forms.
//!
//! Each page re-renders with the submitted values (never the password) and a list of
//! validation errors when a submission is rejected.

use dioxus::prelude::*;

use crate::context::PageContext;
use crate::layout::Layout;

/// Values echoed back into the signup form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupValues {
    pub username: String,
    pub email: String,
    pub image_url: String,
}

/// Values echoed back into the profile form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileValues {
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: String,
    pub location: String,
}

#[component]
fn FormErrors(errors: Vec<String>) -> Element {
    rsx! {
        for (idx, error) in errors.iter().enumerate() {
            span { key: "{idx}", class: "text-danger", "{error}" }
        }
    }
}

#[component]
pub fn SignupPage(context: PageContext, values: SignupValues, errors: Vec<String>) -> Element {
    rsx! {
        Layout { context: context, title: "Sign up".to_string(),
            div { class: "row justify-content-md-center",
                div { class: "col-md-7 col-lg-5",
                    h2 { class: "join-message", "Join Warbler today." }
                    form { method: "POST", id: "user_form",
                        FormErrors { errors: errors }
                        input { name: "username", class: "form-control", placeholder: "Username", value: "{values.username}" }
                        input { name: "email", r#type: "email", class: "form-control", placeholder: "E-mail", value: "{values.email}" }
                        input { name: "password", r#type: "password", class: "form-control", placeholder: "Password" }
                        input { name: "image_url", class: "form-control", placeholder: "(Optional) Image URL", value: "{values.image_url}" }
                        button { class: "btn btn-primary btn-lg btn-block", "Sign me up!" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LoginPage(context: PageContext, username: String, errors: Vec<String>) -> Element {
    rsx! {
        Layout { context: context, title: "Log in".to_string(),
            div { class: "row justify-content-md-center",
                div { class: "col-md-7 col-lg-5",
                    h2 { class: "join-message", "Welcome back." }
                    form { method: "POST", id: "user_form",
                        FormErrors { errors: errors }
                        input { name: "username", class: "form-control", placeholder: "Username", value: "{username}" }
                        input { name: "password", r#type: "password", class: "form-control", placeholder: "Password" }
                        button { class: "btn btn-primary btn-block btn-lg", "Log in" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EditProfilePage(context: PageContext, values: ProfileValues, errors: Vec<String>) -> Element {
    rsx! {
        Layout { context: context, title: "Edit Profile".to_string(),
            div { class: "row justify-content-md-center",
                div { class: "col-md-7 col-lg-5",
                    h2 { class: "join-message", "Edit Your Profile." }
                    form { method: "POST", id: "user_form",
                        FormErrors { errors: errors }
                        input { name: "username", class: "form-control", placeholder: "Username", value: "{values.username}" }
                        input { name: "email", r#type: "email", class: "form-control", placeholder: "E-mail", value: "{values.email}" }
                        input { name: "image_url", class: "form-control", placeholder: "(Optional) Image URL", value: "{values.image_url}" }
                        input { name: "header_image_url", class: "form-control", placeholder: "(Optional) Header Image URL", value: "{values.header_image_url}" }
                        textarea { name: "bio", class: "form-control", placeholder: "(Optional) Tell us about yourself", "{values.bio}" }
                        input { name: "location", class: "form-control", placeholder: "(Optional) Location", value: "{values.location}" }
                        p { "To confirm changes, enter your password:" }
                        input { name: "password", r#type: "password", class: "form-control", placeholder: "Password" }
                        div { class: "edit-btn-area",
                            button { class: "btn btn-success", "Edit this user!" }
                            a { href: "/", class: "btn btn-outline-secondary", "Cancel" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NewMessagePage(context: PageContext, text: String, errors: Vec<String>) -> Element {
    rsx! {
        Layout { context: context, title: "New Message".to_string(),
            div { class: "row justify-content-md-center",
                div { class: "col-md-7 col-lg-5",
                    form { method: "POST",
                        FormErrors { errors: errors }
                        textarea { name: "text", class: "form-control", rows: "3", placeholder: "What's happening?", "{text}" }
                        button { class: "btn btn-outline-success btn-block", "Add my message!" }
                    }
                }
            }
        }
    }
}
