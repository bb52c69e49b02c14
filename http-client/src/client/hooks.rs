use super::Request;
use std::{
    borrow::Cow,
    fmt::{self, Debug, Display},
    sync::Arc,
};

/// 钩子函数
///
/// 钩子函数通过可变引用修改请求上下文，如需中止当前阶段，可以向请求上下文写入错误。
pub type HookFn = Arc<dyn Fn(&mut Request) + Send + Sync>;

/// 钩子
///
/// 由可选的名称和钩子函数组成，名称仅用于识别和删除，不要求唯一。
#[derive(Clone)]
pub struct Hook {
    name: Option<Cow<'static, str>>,
    func: HookFn,
}

impl Hook {
    /// 创建具名钩子
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>, func: impl Fn(&mut Request) + Send + Sync + 'static) -> Self {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// 创建匿名钩子
    #[inline]
    pub fn anonymous(func: impl Fn(&mut Request) + Send + Sync + 'static) -> Self {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// 获取钩子名称
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 调用钩子函数
    #[inline]
    pub fn call(&self, request: &mut Request) {
        (self.func)(request)
    }
}

impl Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").field("name", &self.name).finish()
    }
}

/// 钩子链
///
/// 按顺序保存一个阶段的所有钩子，克隆后的钩子链与原钩子链相互独立。
#[derive(Clone, Default, Debug)]
pub struct HookChain {
    hooks: Vec<Hook>,
}

impl HookChain {
    /// 创建空的钩子链
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// 在链尾追加匿名钩子
    #[inline]
    pub fn push_back(&mut self, func: impl Fn(&mut Request) + Send + Sync + 'static) -> &mut Self {
        self.push_back_hook(Hook::anonymous(func))
    }

    /// 在链尾追加具名钩子
    #[inline]
    pub fn push_back_named(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        func: impl Fn(&mut Request) + Send + Sync + 'static,
    ) -> &mut Self {
        self.push_back_hook(Hook::new(name, func))
    }

    /// 在链尾追加钩子
    #[inline]
    pub fn push_back_hook(&mut self, hook: Hook) -> &mut Self {
        self.hooks.push(hook);
        self
    }

    /// 在链首插入匿名钩子
    #[inline]
    pub fn push_front(&mut self, func: impl Fn(&mut Request) + Send + Sync + 'static) -> &mut Self {
        self.push_front_hook(Hook::anonymous(func))
    }

    /// 在链首插入具名钩子
    #[inline]
    pub fn push_front_named(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        func: impl Fn(&mut Request) + Send + Sync + 'static,
    ) -> &mut Self {
        self.push_front_hook(Hook::new(name, func))
    }

    /// 在链首插入钩子
    #[inline]
    pub fn push_front_hook(&mut self, hook: Hook) -> &mut Self {
        self.hooks.insert(0, hook);
        self
    }

    /// 删除所有指定名称的钩子
    ///
    /// 返回被删除的钩子数量，没有匹配的钩子时返回 0。匿名钩子不会被删除。
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.hooks.len();
        self.hooks.retain(|hook| hook.name() != Some(name));
        before - self.hooks.len()
    }

    /// 清空钩子链
    #[inline]
    pub fn clear(&mut self) {
        self.hooks.clear()
    }

    /// 获取钩子数量
    #[inline]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// 钩子链是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// 遍历钩子
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Hook> {
        self.hooks.iter()
    }

    /// 复制钩子链
    #[inline]
    pub fn copy(&self) -> Self {
        self.to_owned()
    }

    /// 按顺序执行所有钩子
    ///
    /// 不检查请求上下文中的错误。
    pub fn run(&self, request: &mut Request) {
        for hook in self.hooks.iter() {
            hook.call(request);
        }
    }

    /// 按顺序执行钩子，直到请求上下文中出现错误为止
    pub fn run_until_error(&self, request: &mut Request) {
        for hook in self.hooks.iter() {
            if request.error().is_some() {
                return;
            }
            hook.call(request);
        }
    }
}

impl Extend<Hook> for HookChain {
    #[inline]
    fn extend<T: IntoIterator<Item = Hook>>(&mut self, iter: T) {
        self.hooks.extend(iter)
    }
}

impl FromIterator<Hook> for HookChain {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Hook>>(iter: T) -> Self {
        Self {
            hooks: iter.into_iter().collect(),
        }
    }
}

/// 请求阶段
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// 校验请求
    Validate,

    /// 构建请求
    Build,

    /// 发送请求
    Send,

    /// 解析响应
    Unmarshal,

    /// 准备重试
    Retry,

    /// 请求结束
    Complete,
}

impl Phase {
    /// 所有阶段，按执行顺序排列
    pub const ALL: [Phase; 6] = [
        Self::Validate,
        Self::Build,
        Self::Send,
        Self::Unmarshal,
        Self::Retry,
        Self::Complete,
    ];

    /// 获取阶段名称
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Build => "build",
            Self::Send => "send",
            Self::Unmarshal => "unmarshal",
            Self::Retry => "retry",
            Self::Complete => "complete",
        }
    }
}

impl Display for Phase {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 钩子集合
///
/// 每个阶段对应一条钩子链，克隆时会复制每一条钩子链。
#[derive(Clone, Default, Debug)]
pub struct Hooks {
    validate: HookChain,
    build: HookChain,
    send: HookChain,
    unmarshal: HookChain,
    retry: HookChain,
    complete: HookChain,
}

impl Hooks {
    /// 创建空的钩子集合
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// 获取指定阶段的钩子链
    pub fn chain(&self, phase: Phase) -> &HookChain {
        match phase {
            Phase::Validate => &self.validate,
            Phase::Build => &self.build,
            Phase::Send => &self.send,
            Phase::Unmarshal => &self.unmarshal,
            Phase::Retry => &self.retry,
            Phase::Complete => &self.complete,
        }
    }

    /// 获取指定阶段的钩子链的可变引用
    pub fn chain_mut(&mut self, phase: Phase) -> &mut HookChain {
        match phase {
            Phase::Validate => &mut self.validate,
            Phase::Build => &mut self.build,
            Phase::Send => &mut self.send,
            Phase::Unmarshal => &mut self.unmarshal,
            Phase::Retry => &mut self.retry,
            Phase::Complete => &mut self.complete,
        }
    }

    /// 获取 Validate 阶段的钩子链
    #[inline]
    pub fn validate(&self) -> &HookChain {
        &self.validate
    }

    /// 获取 Validate 阶段的钩子链的可变引用
    #[inline]
    pub fn validate_mut(&mut self) -> &mut HookChain {
        &mut self.validate
    }

    /// 获取 Build 阶段的钩子链
    #[inline]
    pub fn build(&self) -> &HookChain {
        &self.build
    }

    /// 获取 Build 阶段的钩子链的可变引用
    #[inline]
    pub fn build_mut(&mut self) -> &mut HookChain {
        &mut self.build
    }

    /// 获取 Send 阶段的钩子链
    #[inline]
    pub fn send(&self) -> &HookChain {
        &self.send
    }

    /// 获取 Send 阶段的钩子链的可变引用
    #[inline]
    pub fn send_mut(&mut self) -> &mut HookChain {
        &mut self.send
    }

    /// 获取 Unmarshal 阶段的钩子链
    #[inline]
    pub fn unmarshal(&self) -> &HookChain {
        &self.unmarshal
    }

    /// 获取 Unmarshal 阶段的钩子链的可变引用
    #[inline]
    pub fn unmarshal_mut(&mut self) -> &mut HookChain {
        &mut self.unmarshal
    }

    /// 获取 Retry 阶段的钩子链
    #[inline]
    pub fn retry(&self) -> &HookChain {
        &self.retry
    }

    /// 获取 Retry 阶段的钩子链的可变引用
    #[inline]
    pub fn retry_mut(&mut self) -> &mut HookChain {
        &mut self.retry
    }

    /// 获取 Complete 阶段的钩子链
    #[inline]
    pub fn complete(&self) -> &HookChain {
        &self.complete
    }

    /// 获取 Complete 阶段的钩子链的可变引用
    #[inline]
    pub fn complete_mut(&mut self) -> &mut HookChain {
        &mut self.complete
    }

    /// 复制钩子集合
    #[inline]
    pub fn copy(&self) -> Self {
        self.to_owned()
    }
}
