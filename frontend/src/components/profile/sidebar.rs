use crate::api::upload::upload_image;
use crate::components::common_toast::{ToastContext, ToastType};
use compete_shared::{Result, SharedError, UserDto, UserField};
use log::{debug, error};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

const AVATAR_PLACEHOLDER: &str = "/static/avatar-placeholder.png";

#[derive(Properties, PartialEq)]
pub struct ProfileSidebarProps {
    pub user: UserDto,
    /// Only the owner of the profile gets the edit/save button.
    pub editable: bool,
    pub editing: bool,
    pub on_edit: Callback<()>,
    pub on_save: Callback<UserDto>,
}

/// Working copy of the user behind the edit form.
#[derive(Clone, Debug, PartialEq)]
struct EditForm {
    user: UserDto,
}

enum EditFormAction {
    Reset(UserDto),
    Set(UserField, String),
    /// An avatar upload settled; only a successful one changes `avatar_url`.
    AvatarUploaded(Result<String>),
}

/// What to show once an avatar upload settles.
#[derive(Debug, PartialEq)]
struct UploadFeedback {
    preview: String,
    toast_type: ToastType,
    message: &'static str,
}

fn upload_feedback(result: &Result<String>, previous_avatar: &str) -> UploadFeedback {
    match result {
        Ok(url) => UploadFeedback {
            preview: url.clone(),
            toast_type: ToastType::Success,
            message: "Avatar uploaded!",
        },
        Err(SharedError::Upload { .. }) => UploadFeedback {
            preview: previous_avatar.to_string(),
            toast_type: ToastType::Error,
            message: "Failed to upload image!",
        },
        Err(_) => UploadFeedback {
            preview: previous_avatar.to_string(),
            toast_type: ToastType::Error,
            message: "Error while uploading image!",
        },
    }
}

impl Reducible for EditForm {
    type Action = EditFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            EditFormAction::Reset(user) => Rc::new(Self { user }),
            EditFormAction::Set(field, value) => Rc::new(Self {
                user: self.user.with_field(field, value),
            }),
            EditFormAction::AvatarUploaded(Ok(url)) => Rc::new(Self {
                user: self.user.with_field(UserField::AvatarUrl, url),
            }),
            EditFormAction::AvatarUploaded(Err(_)) => self,
        }
    }
}

#[function_component(ProfileSidebar)]
pub fn profile_sidebar(props: &ProfileSidebarProps) -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let form = {
        let user = props.user.clone();
        use_reducer(move || EditForm { user })
    };
    let avatar_preview = use_state(|| props.user.avatar_url.clone());
    let uploading = use_state(|| false);
    let file_input_ref = use_node_ref();

    // Saved or reloaded user replaces the working copy
    {
        let form = form.dispatcher();
        let avatar_preview = avatar_preview.clone();
        use_effect_with(props.user.clone(), move |user| {
            avatar_preview.set(user.avatar_url.clone());
            form.dispatch(EditFormAction::Reset(user.clone()));
            || ()
        });
    }

    let on_input = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match UserField::from_input_name(&input.name()) {
                Ok(field) => form.dispatch(EditFormAction::Set(field, input.value())),
                Err(e) => error!("Ignoring input change: {}", e),
            }
        })
    };

    let on_avatar_click = {
        let editing = props.editing;
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if !editing {
                return;
            }
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let form = form.clone();
        let avatar_preview = avatar_preview.clone();
        let uploading = uploading.clone();
        let toast = toast.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let object_url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => {
                    avatar_preview.set(url.clone());
                    Some(url)
                }
                Err(e) => {
                    error!("Could not preview avatar: {:?}", e);
                    None
                }
            };

            let dispatcher = form.dispatcher();
            let previous_avatar = form.user.avatar_url.clone();
            let avatar_preview = avatar_preview.clone();
            let uploading = uploading.clone();
            let toast = toast.clone();
            uploading.set(true);
            spawn_local(async move {
                let result = upload_image(&file).await;
                match &result {
                    Ok(url) => debug!("Avatar replaced with {}", url),
                    Err(SharedError::Upload { errno }) => {
                        error!("Avatar upload rejected with errno {}", errno)
                    }
                    Err(e) => error!("Avatar upload failed: {}", e),
                }

                let feedback = upload_feedback(&result, &previous_avatar);
                avatar_preview.set(feedback.preview);
                match feedback.toast_type {
                    ToastType::Success => toast.success(feedback.message),
                    ToastType::Error => toast.error(feedback.message),
                }
                dispatcher.dispatch(EditFormAction::AvatarUploaded(result));
                uploading.set(false);

                // The preview no longer points at the local file
                if let Some(url) = object_url {
                    if let Err(e) = Url::revoke_object_url(&url) {
                        error!("Could not release avatar preview: {:?}", e);
                    }
                }
            });
        })
    };

    let on_button_click = {
        let editing = props.editing;
        let on_edit = props.on_edit.clone();
        let on_save = props.on_save.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            if editing {
                on_save.emit(form.user.clone());
            } else {
                on_edit.emit(());
            }
        })
    };

    let user = &form.user;
    let avatar_src = if avatar_preview.is_empty() {
        AVATAR_PLACEHOLDER.to_string()
    } else {
        (*avatar_preview).clone()
    };

    html! {
        <div class="w-full max-w-sm mx-auto bg-white shadow rounded-lg overflow-hidden">
            <div class="p-6">
                <div class="flex flex-col items-center">
                    <div
                        class={classes!("relative", if props.editing { "cursor-pointer" } else { "cursor-default" })}
                        onclick={on_avatar_click}
                        title={if props.editing { "Click to upload an avatar" } else { "" }}
                    >
                        <img src={avatar_src} alt="avatar" class="w-32 h-32 rounded-full object-cover mb-4" />
                        if props.editing {
                            <div class="absolute bottom-2 right-2 bg-gray-700 text-white rounded-full px-2 py-1 text-xs">
                                {if *uploading { "..." } else { "📷" }}
                            </div>
                        }
                    </div>
                    <input
                        ref={file_input_ref}
                        type="file"
                        accept="image/*"
                        onchange={on_file_change}
                        class="hidden"
                    />
                    if props.editing {
                        <input
                            type="text"
                            name={UserField::Name.input_name()}
                            value={user.name.clone()}
                            oninput={on_input.clone()}
                            class="text-2xl font-bold text-center mb-2 w-full px-3 py-1 border border-gray-300 rounded-md"
                        />
                    } else {
                        <h2 class="text-2xl font-bold text-center mb-2">{&user.name}</h2>
                    }
                    <p class="text-gray-500 text-center mb-4">{&user.role}</p>
                </div>

                <div class="space-y-4">
                    {field_row("✉", "Email", "email", UserField::Email, &user.email, props.editing, &on_input)}
                    {field_row("🎓", "Grade", "text", UserField::Grade, &user.grade, props.editing, &on_input)}
                    {field_row("📘", "Major", "text", UserField::Major, &user.major, props.editing, &on_input)}
                </div>

                if props.editable {
                    <div class="mt-6">
                        <button
                            onclick={on_button_click}
                            disabled={*uploading}
                            class={classes!(
                                "w-full", "px-4", "py-2", "text-white", "rounded", "transition-colors", "disabled:opacity-50",
                                if props.editing { "bg-green-600 hover:bg-green-700" } else { "bg-blue-600 hover:bg-blue-700" }
                            )}
                        >
                            {if props.editing { "✓ Save profile" } else { "✎ Edit profile" }}
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}

fn field_row(
    icon: &'static str,
    label: &'static str,
    input_type: &'static str,
    field: UserField,
    value: &str,
    editing: bool,
    on_input: &Callback<InputEvent>,
) -> Html {
    html! {
        <div class="flex items-center space-x-2">
            <span title={label}>{icon}</span>
            if editing {
                <input
                    type={input_type}
                    name={field.input_name()}
                    value={value.to_string()}
                    oninput={on_input.clone()}
                    class="flex-grow px-3 py-1 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                />
            } else {
                <span class="truncate">{value}</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form() -> Rc<EditForm> {
        Rc::new(EditForm {
            user: UserDto {
                id: 7,
                name: "Li Hua".to_string(),
                email: "lihua@example.com".to_string(),
                avatar_url: "https://cdn.example.com/old.png".to_string(),
                ..UserDto::default()
            },
        })
    }

    #[test]
    fn test_rejected_upload_keeps_avatar_url() {
        let before = form();
        let after = before.clone().reduce(EditFormAction::AvatarUploaded(Err(SharedError::Upload { errno: 1 })));
        assert_eq!(after.user, before.user);

        let feedback = upload_feedback(&Err(SharedError::Upload { errno: 1 }), &before.user.avatar_url);
        assert_eq!(feedback.preview, "https://cdn.example.com/old.png");
        assert_eq!(feedback.toast_type, ToastType::Error);
        assert_eq!(feedback.message, "Failed to upload image!");
    }

    #[test]
    fn test_network_failure_keeps_avatar_url() {
        let result = Err(SharedError::Network("offline".to_string()));
        let feedback = upload_feedback(&result, "https://cdn.example.com/old.png");
        assert_eq!(feedback.preview, "https://cdn.example.com/old.png");
        assert_eq!(feedback.message, "Error while uploading image!");

        let after = form().reduce(EditFormAction::AvatarUploaded(result));
        assert_eq!(after.user.avatar_url, "https://cdn.example.com/old.png");
    }

    #[test]
    fn test_successful_upload_sets_avatar_url() {
        let url = "https://cdn.example.com/new.png".to_string();
        let feedback = upload_feedback(&Ok(url.clone()), "https://cdn.example.com/old.png");
        assert_eq!(feedback.preview, url);
        assert_eq!(feedback.toast_type, ToastType::Success);

        let after = form().reduce(EditFormAction::AvatarUploaded(Ok(url.clone())));
        assert_eq!(after.user.avatar_url, url);
        assert_eq!(after.user.name, "Li Hua");
    }
}
