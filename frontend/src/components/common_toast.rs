use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

const DEFAULT_DURATION_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: u32, // milliseconds
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.add_toast.emit(Toast::new(message, ToastType::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add_toast.emit(Toast::new(message, ToastType::Error));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // use_reducer keeps concurrent adds/removes from overwriting each other
    let toasts = use_reducer(ToastList::default);

    let add_toast = {
        let toasts = toasts.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            toasts.dispatch(ToastListAction::Add(toast));

            let toasts = toasts.clone();
            Timeout::new(duration, move || {
                toasts.dispatch(ToastListAction::Remove(toast_id));
            })
            .forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: Uuid| toasts.dispatch(ToastListAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: toasts.items.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastStack />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastListAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastListAction;

    fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastListAction::Add(toast) => items.push(toast),
            ToastListAction::Remove(id) => items.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self { items })
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let remove_toast = toast_context.remove_toast.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| remove_toast.emit(toast_id))
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="flex-shrink-0 mr-3 text-lg font-bold">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button
                onclick={on_close}
                class="flex-shrink-0 ml-3 text-white hover:text-gray-200 focus:outline-none"
            >
                {"×"}
            </button>
        </div>
    }
}
